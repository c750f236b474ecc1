//! Fluent builder for constructing a [`BookingCenter`].

use tbc_core::CounterId;

use crate::counter::Counter;
use crate::{BookingCenter, CenterConfig, SimError, SimResult};

/// Fluent builder for [`BookingCenter`].
///
/// # Required inputs
///
/// - [`CenterConfig`] — counter count, queue capacity, processing time.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                |
/// |---------------|----------------------------------------|
/// | `.labels(v)`  | `C1`, `C2`, … in pool order            |
///
/// # Example
///
/// ```rust,ignore
/// let mut center = CenterBuilder::new(config)
///     .labels(vec!["North".into(), "South".into()])
///     .build()?;
/// ```
pub struct CenterBuilder {
    config: CenterConfig,
    labels: Option<Vec<String>>,
}

impl CenterBuilder {
    pub fn new(config: CenterConfig) -> Self {
        Self { config, labels: None }
    }

    /// Supply custom counter labels (must be length `config.counters`).
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Validate the configuration and return a ready-to-run [`BookingCenter`].
    pub fn build(self) -> SimResult<BookingCenter> {
        self.config.validate()?;

        let labels = match self.labels {
            Some(l) => {
                if l.len() != self.config.counters as usize {
                    return Err(SimError::Config(format!(
                        "{} labels supplied for {} counters",
                        l.len(),
                        self.config.counters
                    )));
                }
                l
            }
            None => (1..=self.config.counters).map(|n| format!("C{n}")).collect(),
        };

        let counters = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                Counter::new(
                    CounterId(i as u32),
                    label,
                    self.config.queue_capacity,
                    self.config.ticket_process_secs,
                )
            })
            .collect();

        Ok(BookingCenter {
            config: self.config,
            counters,
            next_ticket_id: 0,
        })
    }
}
