use std::io::Write;

/// The environment a command runs in: where its output goes and how it exits.
pub trait Host: Send + Sync {
    /// Sink for regular output, such as the console report.
    fn output(&mut self) -> impl Write;

    /// Sink for diagnostics shown to the user.
    fn error(&mut self) -> impl Write;

    /// Terminate with the given status code. Test hosts may just record it.
    fn exit(&mut self, code: i32);
}

/// Host that captures everything in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
