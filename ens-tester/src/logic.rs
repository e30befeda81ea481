use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::LogicCheck;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_millis")]
    pub average_duration: Duration,
}

impl ScenarioResult {
    pub fn single(name: impl Into<String>, outcome: Result<(), String>, elapsed: Duration) -> Self {
        let failures: Vec<String> = outcome.err().into_iter().collect();
        Self {
            scenario_name: name.into(),
            passed: failures.is_empty(),
            iterations_run: 1,
            successful_iterations: usize::from(failures.is_empty()),
            failures,
            average_duration: elapsed,
        }
    }
}

/// Runs logic checks against `ens-core` directly, without a browser.
pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(&self, name: &str, check: LogicCheck, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {} ({iterations} iterations)", name.bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let start = Instant::now();
            match check() {
                Ok(()) => successes += 1,
                Err(err) => failures.push(format!("iteration {}: {err:#}", i + 1)),
            }
            durations.push(start.elapsed());
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: name.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_ok() -> anyhow::Result<()> {
        Ok(())
    }

    fn always_fails() -> anyhow::Result<()> {
        anyhow::bail!("nope")
    }

    #[test]
    fn counts_successes_and_failures() {
        let tester = LogicTester::new(false);
        let ok = tester.run_scenario("ok", always_ok, 3);
        assert!(ok.passed);
        assert_eq!(ok.successful_iterations, 3);

        let bad = tester.run_scenario("bad", always_fails, 2);
        assert!(!bad.passed);
        assert_eq!(bad.failures, ["iteration 1: nope", "iteration 2: nope"]);
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult::single("x", Ok(()), Duration::from_millis(1500));
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 1500);
        let back: ScenarioResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.average_duration, Duration::from_millis(1500));
    }
}
