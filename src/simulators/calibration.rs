use super::{Pacing, Sequencer};
use crate::domain::{
    CalibrationComponentStatus, CalibrationOverallStatus, CalibrationStatus, ComponentType,
};
use crate::observers::{Notification, ProgressPlan};

/// One calibration round.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationScenario {
    /// Components calibrated this round, in order.
    pub components: Vec<ComponentType>,
    /// Components that stop halfway and report `Failed`.
    pub failing: Vec<ComponentType>,
    /// Status reported once every component has finished.
    pub overall: CalibrationOverallStatus,
}

impl CalibrationScenario {
    /// Every component succeeds and the round ends with `overall`.
    pub fn passing(components: Vec<ComponentType>, overall: CalibrationOverallStatus) -> Self {
        Self {
            components,
            failing: Vec::new(),
            overall,
        }
    }
}

/// Per-component progress followed by the overall status.
///
/// An `InitializationFailed` round never reaches the components, so its
/// plan holds only the overall status.
pub fn calibration(scenario: &CalibrationScenario, pacing: Pacing) -> ProgressPlan {
    let mut seq = Sequencer::new(pacing);

    if scenario.overall != CalibrationOverallStatus::InitializationFailed {
        for &component in &scenario.components {
            let update = |status, progress| {
                Notification::CalibrationComponent(CalibrationComponentStatus::new(
                    component, status, progress,
                ))
            };

            seq.emit(update(CalibrationStatus::Waiting, 0.0));
            if scenario.failing.contains(&component) {
                seq.emit(update(CalibrationStatus::InProgress, 0.25));
                seq.emit(update(CalibrationStatus::InProgress, 0.5));
                seq.emit(update(CalibrationStatus::Failed, 0.5));
            } else {
                for progress in [0.25, 0.5, 0.75] {
                    seq.emit(update(CalibrationStatus::InProgress, progress));
                }
                seq.emit(update(CalibrationStatus::Complete, 1.0));
            }
        }
    }

    seq.emit(Notification::CalibrationOverall(scenario.overall));
    seq.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn component_updates(plan: &ProgressPlan) -> Vec<CalibrationComponentStatus> {
        plan.steps()
            .iter()
            .filter_map(|step| match &step.notification {
                Notification::CalibrationComponent(status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn passing_round_completes_every_component() {
        let scenario = CalibrationScenario::passing(
            vec![ComponentType::BaseAccelerometer, ComponentType::LidGyroscope],
            CalibrationOverallStatus::Complete,
        );

        let plan = calibration(&scenario, Pacing::immediate());
        let updates = component_updates(&plan);

        assert_eq!(updates.len(), 10);
        assert_eq!(updates[4].status, CalibrationStatus::Complete);
        assert_eq!(updates[4].component, ComponentType::BaseAccelerometer);
        assert_eq!(updates[9].component, ComponentType::LidGyroscope);
        assert_eq!(
            plan.last(),
            Some(&Notification::CalibrationOverall(
                CalibrationOverallStatus::Complete
            ))
        );
    }

    #[test]
    fn failing_component_stops_at_half() {
        let scenario = CalibrationScenario {
            components: vec![ComponentType::LidAccelerometer],
            failing: vec![ComponentType::LidAccelerometer],
            overall: CalibrationOverallStatus::CurrentRoundFailed,
        };

        let updates = component_updates(&calibration(&scenario, Pacing::immediate()));
        let last = updates.last().unwrap();

        assert_eq!(last.status, CalibrationStatus::Failed);
        assert_eq!(last.progress, 0.5);
    }

    #[test]
    fn initialization_failure_skips_components() {
        let scenario = CalibrationScenario::passing(
            vec![ComponentType::BaseGyroscope],
            CalibrationOverallStatus::InitializationFailed,
        );

        let plan = calibration(&scenario, Pacing::immediate());

        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn progress_never_decreases_per_component() {
        let scenario = CalibrationScenario::passing(
            vec![ComponentType::BaseAccelerometer],
            CalibrationOverallStatus::CurrentRoundComplete,
        );
        let plan = calibration(&scenario, Pacing::every(Duration::from_millis(100)));

        let updates = component_updates(&plan);
        assert!(updates.windows(2).all(|w| w[0].progress <= w[1].progress));
        assert!(plan.steps().windows(2).all(|w| w[0].delay < w[1].delay));
    }
}
