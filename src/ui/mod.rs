// Window contents: the raster, scaled up, and a thin status bar.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, container, image, row, text, Space};
use iced::{Alignment, Color, ContentFit, Element, Length, Padding, Theme};

use crate::input::{
    is_printable, KEY_BACKSPACE, KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_LEFT, KEY_RIGHT, KEY_STOP,
    KEY_UP,
};
use crate::machine::MachineStatus;
use crate::video::Frame;

// ─────────────────────────────────────────────────────────────────────────────
//  Messages
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Redraw + status poll.
    Tick,
    /// Decoded key for the machine.
    Key(u8),
    /// Same as F12.
    StopGuest,
    Reset,
}

// ─────────────────────────────────────────────────────────────────────────────
//  Keyboard
// ─────────────────────────────────────────────────────────────────────────────

/// Host key → Cerberus key code. Named keys first, then whatever text the
/// key produced if it is a single printable ASCII character.
pub fn map_key(key: &Key, text: Option<&str>) -> Option<u8> {
    if let Key::Named(named) = key {
        let code = match named {
            Named::F12 => Some(KEY_STOP),
            Named::Backspace | Named::Delete => Some(KEY_BACKSPACE),
            Named::ArrowLeft => Some(KEY_LEFT),
            Named::ArrowRight => Some(KEY_RIGHT),
            Named::ArrowUp => Some(KEY_UP),
            Named::ArrowDown => Some(KEY_DOWN),
            Named::Enter => Some(KEY_ENTER),
            Named::Escape => Some(KEY_ESCAPE),
            _ => None,
        };
        if code.is_some() {
            return code;
        }
    }

    let mut chars = text?.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !c.is_ascii() || !is_printable(c as u8) {
        return None;
    }
    Some(c as u8)
}

pub fn key_event(event: keyboard::Event) -> Option<Message> {
    match event {
        keyboard::Event::KeyPressed { key, text, .. } => {
            map_key(&key, text.as_deref()).map(Message::Key)
        }
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Screen
// ─────────────────────────────────────────────────────────────────────────────

pub fn frame_handle(frame: Frame) -> image::Handle {
    image::Handle::from_rgba(frame.width, frame.height, frame.pixels)
}

pub fn screen_view<'a>(handle: &image::Handle) -> Element<'a, Message> {
    let img = image(handle.clone())
        .filter_method(image::FilterMethod::Nearest)
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    container(img)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color::BLACK)),
            ..Default::default()
        })
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
//  Status bar
// ─────────────────────────────────────────────────────────────────────────────

pub fn status_line(status: &MachineStatus) -> String {
    if status.running {
        format!(
            "{} @ {} MHz  |  running  |  {} kHz",
            status.arch,
            status.speed.mhz(),
            status.khz
        )
    } else {
        format!("{} @ {} MHz  |  monitor", status.arch, status.speed.mhz())
    }
}

pub fn status_bar<'a>(status: &MachineStatus) -> Element<'a, Message> {
    let colour = if status.running {
        Color::from_rgb(0.4, 0.85, 0.5)
    } else {
        Color::from_rgb(0.6, 0.7, 0.8)
    };

    let bar = row![
        text(status_line(status)).size(12).color(colour),
        Space::new().width(Length::Fill),
        tool_button("Stop (F12)", Message::StopGuest),
        tool_button("Reset", Message::Reset),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .padding(Padding::from([4, 12]));

    container(bar)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgb(0.12, 0.13, 0.16))),
            ..Default::default()
        })
        .into()
}

fn tool_button<'a>(label: &'a str, msg: Message) -> Element<'a, Message> {
    button(text(label).size(12))
        .on_press(msg)
        .padding(Padding::from([4, 10]))
        .style(|_theme: &Theme, status| {
            let bg = match status {
                button::Status::Hovered => Color::from_rgb(0.25, 0.27, 0.32),
                button::Status::Pressed => Color::from_rgb(0.18, 0.20, 0.24),
                _ => Color::from_rgb(0.18, 0.19, 0.22),
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                text_color: Color::from_rgb(0.8, 0.82, 0.88),
                border: iced::Border {
                    radius: 3.0.into(),
                    width: 1.0,
                    color: Color::from_rgb(0.25, 0.27, 0.30),
                },
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::state::{ArchMode, ClockSpeed};

    #[test]
    fn named_keys() {
        assert_eq!(map_key(&Key::Named(Named::F12), None), Some(0x01));
        assert_eq!(map_key(&Key::Named(Named::Backspace), None), Some(0x08));
        assert_eq!(map_key(&Key::Named(Named::Delete), None), Some(0x08));
        assert_eq!(map_key(&Key::Named(Named::ArrowLeft), None), Some(0x08));
        assert_eq!(map_key(&Key::Named(Named::ArrowRight), None), Some(0x15));
        assert_eq!(map_key(&Key::Named(Named::ArrowUp), None), Some(0x0B));
        assert_eq!(map_key(&Key::Named(Named::ArrowDown), None), Some(0x0A));
        assert_eq!(map_key(&Key::Named(Named::Enter), Some("\r")), Some(0x0D));
        assert_eq!(map_key(&Key::Named(Named::Escape), None), Some(0x1B));
    }

    #[test]
    fn printable_text_passes_through() {
        assert_eq!(map_key(&Key::Character("a".into()), Some("a")), Some(b'a'));
        assert_eq!(map_key(&Key::Character("a".into()), Some("A")), Some(b'A'));
        assert_eq!(map_key(&Key::Named(Named::Space), Some(" ")), Some(b' '));
    }

    #[test]
    fn everything_else_is_dropped() {
        assert_eq!(map_key(&Key::Named(Named::F1), None), None);
        assert_eq!(map_key(&Key::Named(Named::Tab), Some("\t")), None);
        assert_eq!(map_key(&Key::Character("é".into()), Some("é")), None);
        assert_eq!(map_key(&Key::Character("a".into()), None), None);
    }

    #[test]
    fn status_text() {
        let mut s = MachineStatus {
            arch: ArchMode::Z80,
            speed: ClockSpeed::Slow,
            running: false,
            khz: 0,
        };
        assert_eq!(status_line(&s), "Z80 @ 4 MHz  |  monitor");
        s.running = true;
        s.khz = 3998;
        assert!(status_line(&s).ends_with("3998 kHz"));
    }
}
