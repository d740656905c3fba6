/// The objective. Starts dry and can only ever be switched on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fountain {
    on: bool,
}

impl Fountain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
