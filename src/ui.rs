use crate::session::Session;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 15;
const RULE: &str = "----------------------------------------";
const BANNER_RULE: &str = "========================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddSession,
    ViewSessions,
    SaveReport,
    Quit,
}

impl MenuChoice {
    pub const COUNT: i32 = 4;

    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddSession),
            2 => Some(MenuChoice::ViewSessions),
            3 => Some(MenuChoice::SaveReport),
            4 => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::AddSession => "Add Driving Session",
            MenuChoice::ViewSessions => "View All Sessions",
            MenuChoice::SaveReport => "Save Report",
            MenuChoice::Quit => "Quit",
        }
    }
}

pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "   Welcome to the Motorsports Simulator ")?;
    writeln!(out, "{BANNER_RULE}")
}

pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nMenu")?;
    for n in 1..=MenuChoice::COUNT {
        if let Some(choice) = MenuChoice::from_number(n) {
            writeln!(out, "{n}. {}", choice.label())?;
        }
    }
    Ok(())
}

pub fn render_session<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{:<LABEL_WIDTH$}{}", "Driver:", session.driver_name())?;
    writeln!(out, "{:<LABEL_WIDTH$}{}", "Track:", session.track_name())?;
    writeln!(out, "{:<LABEL_WIDTH$}{}", "Vehicle:", session.vehicle())?;

    for (i, lap) in session.lap_times().iter().enumerate() {
        writeln!(out, "Lap {}: {:.2} sec", i + 1, lap)?;
    }
    writeln!(out, "Average: {:.2} sec", session.average_lap())
}

pub fn render_pace<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", session.pace().message())
}
