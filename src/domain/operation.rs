//! The closed set of computations the service exposes.

/// An operation selected by the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /fibonacci/{n}`
    Fibonacci,
    /// `GET /factorial?n={n}`
    Factorial,
    /// `GET /mean` with a JSON array body.
    Mean,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Fibonacci, Operation::Factorial, Operation::Mean];

    /// Route name, as it appears in the URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Fibonacci => "fibonacci",
            Operation::Factorial => "factorial",
            Operation::Mean => "mean",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    /// Exact, case-sensitive match on the route name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fibonacci" => Ok(Operation::Fibonacci),
            "factorial" => Ok(Operation::Factorial),
            "mean" => Ok(Operation::Mean),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_operations() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Fibonacci".parse::<Operation>().is_err());
        assert!("MEAN".parse::<Operation>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("".parse::<Operation>().is_err());
        assert!("unknown".parse::<Operation>().is_err());
        assert!("fibonacci ".parse::<Operation>().is_err());
    }
}
