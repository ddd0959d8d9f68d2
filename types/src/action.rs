use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Roll,
    Hold,
    Quit,
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Decision::Roll => "roll again",
            Decision::Hold => "hold",
            Decision::Quit => "quit",
        };
        write!(f, "{}", string)
    }
}
