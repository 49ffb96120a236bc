use crate::error::InputError;
use crate::session::VehicleClass;
use std::io::{BufRead, Write};
use tracing::debug;

/// Line-oriented prompt/answer console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    raw: Vec<u8>,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            raw: Vec::new(),
            line: String::new(),
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<&str, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes are decoded lossily so a line that is not UTF-8 becomes a
        // rejected answer instead of an I/O error.
        self.raw.clear();
        if self.input.read_until(b'\n', &mut self.raw)? == 0 {
            return Err(InputError::Closed);
        }
        self.line = String::from_utf8_lossy(&self.raw).into_owned();
        Ok(self.line.trim())
    }

    /// Re-prompts until the user types something other than whitespace.
    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String, InputError> {
        loop {
            let answer = self.prompt_line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Re-prompts until the answer parses as an integer in `min..=max`.
    pub fn read_int_in_range(&mut self, prompt: &str, min: i32, max: i32) -> Result<i32, InputError> {
        loop {
            let answer = self.prompt_line(prompt)?;
            match answer.parse::<i32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => {
                    debug!(answer, min, max, "rejected numeric input");
                    writeln!(self.output, "Invalid input.")?;
                }
            }
        }
    }

    pub fn choose_vehicle(&mut self) -> Result<VehicleClass, InputError> {
        writeln!(self.output, "\nChoose Vehicle:")?;
        for (i, vehicle) in VehicleClass::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, vehicle.menu_label())?;
        }

        let max = VehicleClass::ALL.len() as i32;
        loop {
            let choice = self.read_int_in_range(&format!("Select (1-{max}): "), 1, max)?;
            if let Some(vehicle) = VehicleClass::from_menu_choice(choice) {
                return Ok(vehicle);
            }
        }
    }
}
