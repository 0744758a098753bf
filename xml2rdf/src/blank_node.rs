/// Issues blank node references that are unique within one parser instance.
#[derive(Debug)]
pub(crate) struct BlankNodeGenerator {
    prefix: String,
    issued: u64,
}

impl BlankNodeGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    pub fn issue(&mut self) -> String {
        self.issued += 1;
        format!("{}{}", self.prefix, self.issued)
    }
}
