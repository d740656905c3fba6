#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub enum OutputBlock {
    Rule(String),
    Status(String),
    Text(String),
    Event(String),
    Prompt(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Rule(s.into()));
    }

    pub fn status(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Status(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Prompt(s));
        }
    }

    /// Every line, in order, regardless of block kind.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| match b {
            OutputBlock::Rule(s)
            | OutputBlock::Status(s)
            | OutputBlock::Text(s)
            | OutputBlock::Event(s)
            | OutputBlock::Prompt(s) => s.as_str(),
        })
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines().any(|l| l == line)
    }

    /// Console layout: events are set off by a blank line and the prompt
    /// leaves the cursor after `> `.
    pub fn render(&self) -> String {
        let mut text = String::new();
        let mut started_events = false;

        for block in &self.blocks {
            match block {
                OutputBlock::Rule(line) | OutputBlock::Status(line) | OutputBlock::Text(line) => {
                    text.push_str(line);
                    text.push('\n');
                }
                OutputBlock::Event(ev) => {
                    if !started_events && !text.is_empty() {
                        text.push('\n'); // visual separation before first event
                    }
                    started_events = true;
                    text.push_str(ev);
                    text.push('\n');
                }
                OutputBlock::Prompt(p) => {
                    text.push_str(p);
                    text.push_str("\n> ");
                }
            }
        }

        text
    }
}
