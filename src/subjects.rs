//! Dataset roster.
//!
//! The dataset publishes subjects 13 through 98, but not every subject was
//! recorded in every modality. [`Roster`] holds the per-modality exclusion
//! lists from the dataset description and derives the set of "complete"
//! subjects, the ones safe to feed the coupling pipeline.

use std::collections::BTreeSet;

/// Subject id range and per-modality exclusion lists.
///
/// All fields are `pub` so a different release of the dataset can be
/// described with struct-update syntax:
///
/// ```
/// use hbc::Roster;
/// use std::collections::BTreeSet;
///
/// let roster = Roster {
///     missing_pupil: BTreeSet::new(), // pupillometry not needed
///     ..Roster::default()
/// };
/// assert!(roster.complete_subjects().contains(&"sub-094".to_string()));
/// ```
///
/// [`Roster::default`] matches the published dataset description.
#[derive(Debug, Clone)]
pub struct Roster {
    /// First subject id present in the dataset.
    pub first_id: u32,
    /// Last subject id present in the dataset (inclusive).
    pub last_id: u32,
    /// Subjects with no EEG recordings.
    pub missing_eeg: BTreeSet<u32>,
    /// Subjects with no ECG and PPG recordings.
    pub missing_ecg_ppg: BTreeSet<u32>,
    /// Subjects with no pupillometry recordings.
    pub missing_pupil: BTreeSet<u32>,
}

impl Default for Roster {
    /// The published dataset description:
    /// sub-013..sub-031, sub-037, sub-066 have no EEG;
    /// sub-017, sub-037, sub-066 have no ECG and PPG;
    /// sub-017, sub-094 have no pupillometry.
    fn default() -> Self {
        Self {
            first_id: 13,
            last_id: 98,
            missing_eeg: (13..=31).chain([37, 66]).collect(),
            missing_ecg_ppg: [17, 37, 66].into_iter().collect(),
            missing_pupil: [17, 94].into_iter().collect(),
        }
    }
}

impl Roster {
    /// Ids missing at least one modality.
    pub fn excluded_ids(&self) -> BTreeSet<u32> {
        self.missing_eeg
            .iter()
            .chain(&self.missing_ecg_ppg)
            .chain(&self.missing_pupil)
            .copied()
            .collect()
    }

    /// Ids with every modality recorded, ascending.
    pub fn complete_ids(&self) -> Vec<u32> {
        let excluded = self.excluded_ids();
        (self.first_id..=self.last_id)
            .filter(|id| !excluded.contains(id))
            .collect()
    }

    /// BIDS-style labels (`sub-032`, ...) for every complete subject,
    /// ascending.
    pub fn complete_subjects(&self) -> Vec<String> {
        self.complete_ids().into_iter().map(format_subject).collect()
    }
}

/// Format a numeric id as a zero-padded BIDS subject label: `42` -> `sub-042`.
pub fn format_subject(id: u32) -> String {
    format!("sub-{id:03}")
}
