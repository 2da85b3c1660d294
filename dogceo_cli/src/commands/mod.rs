//! CLI subcommand implementations.

pub mod count;
pub mod list;

use std::error::Error;

use anyhow::{bail, Result};
use dogceo_api::{BreedFetcher, BreedName, LookupFailure};

use crate::output::BreedSubBreeds;

/// Looks up each breed in order. Failures are reported on stderr and do
/// not stop the remaining lookups.
pub(crate) async fn lookup_all(
    fetcher: &dyn BreedFetcher,
    breeds: &[String],
) -> (Vec<BreedSubBreeds>, usize) {
    let mut found = Vec::with_capacity(breeds.len());
    let mut failures = 0;

    for breed in breeds {
        match fetcher.sub_breeds(breed).await {
            Ok(sub_breeds) => {
                let name = BreedName::parse(breed)
                    .map(|b| b.to_string())
                    .unwrap_or_else(|_| breed.clone());
                found.push(BreedSubBreeds { breed: name, sub_breeds });
            }
            Err(e) => {
                eprintln!("{}: {}", breed.trim(), describe_failure(&e));
                failures += 1;
            }
        }
    }

    (found, failures)
}

/// The failure message followed by its chain of causes.
pub(crate) fn describe_failure(err: &LookupFailure) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        text.push_str(": ");
        text.push_str(&e.to_string());
        cause = e.source();
    }
    text
}

/// Turns a failure count into the process result.
pub(crate) fn finish(failures: usize, total: usize) -> Result<()> {
    if failures > 0 {
        bail!("{} of {} lookups failed", failures, total);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use async_trait::async_trait;

    use super::*;

    /// Answers from a fixed table instead of the network.
    pub(crate) struct StaticFetcher;

    #[async_trait]
    impl BreedFetcher for StaticFetcher {
        async fn sub_breeds(&self, breed: &str) -> dogceo_api::Result<Vec<String>> {
            match BreedName::parse(breed)?.as_str() {
                "hound" => Ok(vec!["afghan".to_string(), "basset".to_string()]),
                "pug" => Ok(Vec::new()),
                _ => Err(LookupFailure::new("Breed not found")),
            }
        }
    }

    #[tokio::test]
    async fn lookup_all_keeps_going_after_failures() {
        let breeds = vec![
            "Hound".to_string(),
            "unicorn".to_string(),
            " pug ".to_string(),
            "".to_string(),
        ];
        let (found, failures) = lookup_all(&StaticFetcher, &breeds).await;

        assert_eq!(failures, 2);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].breed, "hound");
        assert_eq!(found[0].sub_breeds, vec!["afghan", "basset"]);
        assert_eq!(found[1].breed, "pug");
        assert!(found[1].sub_breeds.is_empty());
    }

    #[test]
    fn describe_failure_includes_causes() {
        assert_eq!(
            describe_failure(&LookupFailure::new("Breed not found")),
            "Breed not found"
        );

        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = LookupFailure::with_source("Failed to fetch sub-breeds", cause);
        assert_eq!(describe_failure(&err), "Failed to fetch sub-breeds: refused");
    }

    #[test]
    fn finish_reports_failures() {
        assert!(finish(0, 3).is_ok());
        let err = finish(1, 3).unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 lookups failed");
    }
}
