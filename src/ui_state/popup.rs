/// The console shows at most one error at a time. Raising the same error
/// again while it is on screen bumps a repeat counter instead.
#[derive(Default)]
pub struct ErrorPopup {
    message: Option<String>,
    repeats: u32,
}

impl ErrorPopup {
    pub(crate) fn raise(&mut self, message: String) {
        match self.message.as_deref() == Some(message.as_str()) {
            true => self.repeats += 1,
            false => {
                self.message = Some(message);
                self.repeats = 0;
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub(crate) fn dismiss(&mut self) {
        self.message = None;
        self.repeats = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_error_is_counted() {
        let mut popup = ErrorPopup::default();
        popup.raise(String::from("database locked"));
        popup.raise(String::from("database locked"));
        assert_eq!(popup.repeats(), 1);

        popup.raise(String::from("bad routine file"));
        assert_eq!(popup.message(), Some("bad routine file"));
        assert_eq!(popup.repeats(), 0);

        popup.dismiss();
        assert!(!popup.is_open());
    }
}
