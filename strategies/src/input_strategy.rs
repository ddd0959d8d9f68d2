use std::{
    fmt::Debug,
    io::{self, BufRead, Read, Stdout, Write},
};

use regex::Regex;
use types::{Decision, PlayerState, Strategy, TurnState};

const PROMPT: &str = "Roll again (r), hold (h), or quit (q/quit/exit)? ";

/// Asks a person for each decision, re-prompting until the answer parses.
///
/// Closing the input counts as quitting.
#[derive(Debug)]
pub struct InputStrategy<R, W> {
    input: R,
    output: W,
}

/// Reads standard input one line at a time, locking it only for the read.
///
/// Any number of these can share the process's stdin, so two human players
/// can sit at the same terminal.
#[derive(Debug, Default)]
pub struct SharedStdin {
    line: Vec<u8>,
    pos: usize,
}

impl Read for SharedStdin {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for SharedStdin {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            self.line = line.into_bytes();
            self.pos = 0;
        }
        Ok(&self.line[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

impl InputStrategy<SharedStdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(SharedStdin::default(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn select_decision_from_input(&mut self, buf: &mut String) -> Result<Decision, String> {
        let _ = write!(self.output, "{PROMPT}");
        let _ = self.output.flush();
        match self.input.read_line(buf) {
            Ok(0) => {
                log::info!("Input closed, treating as quit");
                Ok(Decision::Quit)
            }
            Ok(_) => decision_from_str(buf),
            Err(err) => {
                log::error!("Error reading line from input: {err}");
                Ok(Decision::Quit)
            }
        }
    }
}

impl<R: BufRead + Debug, W: Write + Debug> Strategy for InputStrategy<R, W> {
    fn decide(&mut self, private_info: &PlayerState, turn: &TurnState) -> Decision {
        let _ = writeln!(
            self.output,
            "\n{} rolled a {}\nTurn total: {}, {} (opponent has {})",
            private_info.name, turn.last_roll, turn.turn_total, private_info, turn.opponent_score
        );

        let mut buf = String::new();
        loop {
            match self.select_decision_from_input(&mut buf) {
                Ok(decision) => return decision,
                Err(err) => {
                    buf.clear();
                    log::warn!("Error parsing decision: {err}");
                    let _ = writeln!(self.output, "{err}");
                }
            }
        }
    }
}

pub fn decision_from_str(input: &str) -> Result<Decision, String> {
    let input = input.trim().to_lowercase();
    let re = Regex::new(r"^(?:(?<roll>r|roll)|(?<hold>h|hold)|(?<quit>q|quit|exit))$")
        .expect("Valid decision regex");
    let Some(caps) = re.captures(&input) else {
        return Err(format!(
            "Unable to parse a roll, hold, or quit decision from: {input:?}"
        ));
    };

    if caps.name("roll").is_some() {
        Ok(Decision::Roll)
    } else if caps.name("hold").is_some() {
        Ok(Decision::Hold)
    } else {
        Ok(Decision::Quit)
    }
}
