use crate::alert::{Chime, Silent, TerminalBell};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use crate::weather::Weather;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
pub type LogReceiver = std::sync::mpsc::Receiver<String>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
    log_receiver: LogReceiver,
}

impl App {
    /// Start a new application according to the given configuration. Log
    /// lines arriving on `log_receiver` are shown in the log panel. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, log_receiver: LogReceiver) -> Result<()> {
        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let chime: Box<dyn Chime> = if config.sound {
            Box::new(TerminalBell)
        } else {
            Box::new(Silent)
        };
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(tx, &config, chime))),
            config,
            log_receiver,
        };
        app.start_network(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let weather = Weather::new(
            self.config.api_key.as_deref(),
            &self.config.base_url,
            self.config.request_timeout,
        )?;
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &weather);
                while let Ok(network_event) = net_receiver.recv() {
                    match network_event_handler.handle(network_event).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle network event: {}", e),
                    }
                }
                debug!("Network event channel closed.");
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    async fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Draw and handle terminal events until an exit is requested.
    ///
    async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        self.state.lock().await.mount(Instant::now())?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            while let Ok(entry) = self.log_receiver.try_recv() {
                state.add_log_entry(entry);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                state.unmount();
                break;
            }
        }

        Ok(())
    }
}
