use core::fmt;

/// A sink for a plan's printable shape, suitable for wisdom-style
/// serialization (spec.md S4.4, S6). Anything implementing [`fmt::Write`]
/// already implements this; it exists as a separate trait so a host
/// planner's wisdom writer is not required to be a `fmt::Write` itself.
pub trait Printer {
    fn write_str(&mut self, s: &str) -> fmt::Result;
}

impl<W: fmt::Write> Printer for W {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(self, s)
    }
}
