use std::fmt;

pub const READ_SUFFIX: &str = " min read";

// whole minutes, never below one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadingTime(u32);

impl ReadingTime{
    pub fn from_minutes(minutes: u32) -> ReadingTime{
        ReadingTime(minutes.max(1))
    }
    pub fn minutes(&self) -> u32{
        self.0
    }
}

impl fmt::Display for ReadingTime{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        write!(f, "{}{}", self.0, READ_SUFFIX)
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn renders_with_suffix(){
        assert_eq!(ReadingTime::from_minutes(3).to_string(), "3 min read");
    }

    #[test]
    fn zero_minutes_is_clamped(){
        assert_eq!(ReadingTime::from_minutes(0).minutes(), 1);
        assert_eq!(ReadingTime::from_minutes(0).to_string(), "1 min read");
    }
}
