/// Count direction of the stopwatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    CountUp,
    CountDown,
}

impl Mode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Mode::CountUp => Mode::CountDown,
            Mode::CountDown => Mode::CountUp,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::CountUp => "count-up",
            Mode::CountDown => "count-down",
        }
    }
}

impl ufmt::uDisplay for Mode {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.as_str())
    }
}
