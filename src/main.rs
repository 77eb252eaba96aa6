#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;
mod cpu;
mod input;
mod machine;
mod monitor;
mod storage;
mod ui;
mod video;

use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::TrySendError;
use iced::widget::{column, container, image};
use iced::{event, time, Color, Element, Length, Subscription, Task, Theme};

use config::{Args, Config, USAGE};
use machine::memory::MemoryBus;
use machine::state::{ArchMode, ClockSpeed};
use machine::{Launch, MachineCmd, MachineStatus};
use storage::DirStorage;
use ui::Message;
use video::Raster;

/// Checked settings `main` hands to `App::boot`.
#[derive(Debug, Clone)]
struct Startup {
    sd_dir: PathBuf,
    arch: ArchMode,
    speed: ClockSpeed,
    scanline_doubling: bool,
    autoload: Option<Vec<u8>>,
}

// ─────────────────────────────────────────────────────────────────────────────
//  Application state
// ─────────────────────────────────────────────────────────────────────────────

struct App {
    /// Shared memory; read-only from this side.
    bus: MemoryBus,
    /// Channel to send commands to the machine thread.
    cmd_tx: crossbeam_channel::Sender<MachineCmd>,
    /// Keyboard → machine.
    key_tx: crossbeam_channel::Sender<u8>,
    /// Channel to receive status from the machine thread.
    status_rx: crossbeam_channel::Receiver<MachineStatus>,
    /// Last known machine status.
    status: MachineStatus,

    raster: Raster,
    /// Last rendered frame.
    frame: image::Handle,
}

impl App {
    fn boot(startup: Startup) -> (Self, Task<Message>) {
        let storage = match DirStorage::open(&startup.sd_dir) {
            Ok(s) => s,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        };

        let handle = machine::spawn_machine(Launch {
            storage: Box::new(storage),
            arch: startup.arch,
            speed: startup.speed,
            autoload: startup.autoload,
        });
        let raster = Raster::new(startup.scanline_doubling);

        let frame = ui::frame_handle(raster.render(&handle.bus));
        let status = handle.status_rx.recv_timeout(Duration::from_secs(1)).unwrap_or(
            MachineStatus {
                arch: startup.arch,
                speed: startup.speed,
                running: false,
                khz: 0,
            },
        );

        let app = Self {
            bus: handle.bus,
            cmd_tx: handle.cmd_tx,
            key_tx: handle.key_tx,
            status_rx: handle.status_rx,
            status,
            raster,
            frame,
        };

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                while let Ok(s) = self.status_rx.try_recv() {
                    self.status = s;
                }
                self.frame = ui::frame_handle(self.raster.render(&self.bus));
            }

            Message::Key(code) => {
                if let Err(TrySendError::Full(k)) = self.key_tx.try_send(code) {
                    log::trace!("key queue full, dropped {k:#04x}");
                }
            }

            Message::StopGuest => {
                let _ = self.cmd_tx.send(MachineCmd::Stop);
            }

            Message::Reset => {
                let _ = self.cmd_tx.send(MachineCmd::Reset);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![ui::screen_view(&self.frame), ui::status_bar(&self.status)];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgb(0.09, 0.10, 0.12))),
                ..Default::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // ~60 Hz redraw, independent of the machine's 50 Hz tick.
        let tick = time::every(Duration::from_millis(16)).map(|_| Message::Tick);

        let keys = event::listen_with(|event, _status, _id| {
            if let iced::Event::Keyboard(e) = event {
                ui::key_event(e)
            } else {
                None
            }
        });

        Subscription::batch([tick, keys])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Cleanup on exit
// ─────────────────────────────────────────────────────────────────────────────

impl Drop for App {
    fn drop(&mut self) {
        log::info!("Window closing, stopping machine");
        let _ = self.cmd_tx.send(MachineCmd::Quit);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Entry point
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> iced::Result {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("cerberus: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut config = Config::load();
    args.apply(&mut config);
    if args.save_config {
        config.save();
    }
    log::info!(
        "Config: cpu={}, clock={} MHz, doubling={}",
        config.arch,
        config.speed.mhz(),
        config.scanline_doubling
    );

    let Some(sd_dir) = config.storage_dir() else {
        log::error!("No SD card directory (set --sd or HOME)");
        std::process::exit(1);
    };
    let storage = match DirStorage::open(&sd_dir) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("SD card: {}", storage.root().display());

    let autoload = match &config.autoload {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                log::error!("Cannot read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let startup = Startup {
        sd_dir: storage.root().to_path_buf(),
        arch: config.arch,
        speed: config.speed,
        scanline_doubling: config.scanline_doubling,
        autoload,
    };

    iced::application(move || App::boot(startup.clone()), App::update, App::view)
        .title(|_: &App| format!("Cerberus 2100 v{}", env!("CARGO_PKG_VERSION")))
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((640.0, 510.0))
        .run()
}
