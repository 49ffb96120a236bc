use crate::error::{InputError, StoreError};
use crate::input::Console;
use crate::report::{self, REPORT_FILE};
use crate::session::Session;
use crate::store::SessionStore;
use crate::ui::{self, MenuChoice};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub struct App<R, W, G> {
    console: Console<R, W>,
    rng: G,
    store: SessionStore,
    report_path: PathBuf,
    show_banner: bool,
}

impl<R: BufRead, W: Write, G: Rng> App<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self {
            console: Console::new(input, output),
            rng,
            store: SessionStore::new(),
            report_path: PathBuf::from(REPORT_FILE),
            show_banner: true,
        }
    }

    /// Redirects "Save Report" away from the working directory.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the menu loop until Quit is chosen or the input runs dry.
    pub fn run(&mut self) -> Result<(), anyhow::Error> {
        if self.show_banner {
            ui::render_banner(self.console.out())?;
        }

        loop {
            ui::render_menu(self.console.out())?;
            let choice = match self.console.read_int_in_range(
                &format!("Enter choice (1-{}): ", MenuChoice::COUNT),
                1,
                MenuChoice::COUNT,
            ) {
                Ok(n) => MenuChoice::from_number(n),
                Err(InputError::Closed) => {
                    info!("input closed, leaving");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            let step = match choice {
                Some(MenuChoice::AddSession) => self.add_session(),
                Some(MenuChoice::ViewSessions) => self.view_sessions().map_err(InputError::from),
                Some(MenuChoice::SaveReport) => self.save_report().map_err(InputError::from),
                Some(MenuChoice::Quit) => {
                    writeln!(self.console.out(), "Goodbye!")?;
                    info!(sessions = self.store.len(), "quit");
                    return Ok(());
                }
                None => continue,
            };

            match step {
                Ok(()) => {}
                Err(InputError::Closed) => {
                    info!("input closed, leaving");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn add_session(&mut self) -> Result<(), InputError> {
        if self.store.is_full() {
            writeln!(self.console.out(), "Session limit reached.")?;
            warn!(capacity = self.store.capacity(), "session refused, store full");
            return Ok(());
        }

        let driver = self.console.read_non_empty("Enter driver name: ")?;
        let track = self.console.read_non_empty("Enter track name: ")?;
        let vehicle = self.console.choose_vehicle()?;
        let session = Session::record(driver, track, vehicle, &mut self.rng);

        match self.store.add(session.clone()) {
            Ok(()) => {
                info!(
                    driver = session.driver_name(),
                    track = session.track_name(),
                    vehicle = %session.vehicle(),
                    average = session.average_lap(),
                    "session added"
                );
                let out = self.console.out();
                writeln!(out, "\nSession added!")?;
                ui::render_session(out, &session)?;
                ui::render_pace(out, &session)?;
            }
            Err(StoreError::CapacityExceeded { capacity }) => {
                warn!(capacity, "session refused, store full");
                writeln!(self.console.out(), "Session limit reached.")?;
            }
        }
        Ok(())
    }

    fn view_sessions(&mut self) -> std::io::Result<()> {
        let out = self.console.out();
        if self.store.is_empty() {
            return writeln!(out, "No sessions recorded.");
        }
        for session in &self.store {
            ui::render_session(out, session)?;
        }
        Ok(())
    }

    fn save_report(&mut self) -> std::io::Result<()> {
        match report::save_report(&self.report_path, &self.store) {
            Ok(_) => writeln!(
                self.console.out(),
                "Report saved to {}",
                self.report_path.display()
            ),
            Err(e) => {
                error!(error = %e, "report not saved");
                writeln!(self.console.out(), "Failed to save report: {e}")
            }
        }
    }
}
