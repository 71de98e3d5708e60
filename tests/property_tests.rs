//! Property-based tests for the workflow engine.
//!
//! These tests use proptest to verify the engine's guarantees hold across
//! many randomly generated scripts and request sequences.

mod common;

use common::settle;
use parking_lot::Mutex;
use proptest::prelude::*;
use rma_workflow::core::{StateHistory, StateTransition};
use rma_workflow::domain::{
    CalibrationComponentStatus, CalibrationStatus, Component, ComponentRepairStatus,
    ComponentType, DeviceInformation, ShutdownMethod,
};
use rma_workflow::scheduler::ManualScheduler;
use rma_workflow::workflow::Operation;
use rma_workflow::{ErrorCode, Pending, RmaService, RmaState, Script, StateResult};
use std::sync::Arc;
use std::time::Duration;

fn bare_engine() -> (Arc<ManualScheduler>, RmaService) {
    let scheduler = Arc::new(ManualScheduler::new());
    let service = RmaService::new(scheduler.clone());
    (scheduler, service)
}

/// Engine with the lists `set_device_information` indexes into.
fn engine() -> (Arc<ManualScheduler>, RmaService) {
    let (scheduler, service) = bare_engine();
    service.set_get_region_list_result(vec![String::from("US")]);
    service.set_get_sku_list_result(vec![1]);
    (scheduler, service)
}

/// Issue `operation` with arguments that satisfy its field checks.
fn invoke(service: &RmaService, operation: Operation) -> Pending<StateResult> {
    use Operation::*;
    match operation {
        BeginFinalization => service.begin_finalization(),
        NetworkSelectionComplete => service.network_selection_complete(),
        UpdateOsSkipped => service.update_os_skipped(),
        SetSameOwner => service.set_same_owner(),
        SetDifferentOwner => service.set_different_owner(),
        SetWipeDevice => service.set_wipe_device(true),
        ChooseManuallyDisableWriteProtect => service.choose_manually_disable_write_protect(),
        ChooseRsuDisableWriteProtect => service.choose_rsu_disable_write_protect(),
        SetRsuDisableWriteProtectCode => service.set_rsu_disable_write_protect_code("12345678"),
        WriteProtectManuallyDisabled => service.write_protect_manually_disabled(),
        ConfirmManualWpDisableComplete => service.confirm_manual_wp_disable_complete(),
        SetComponentList => service.set_component_list(&[Component::new(
            ComponentType::Camera,
            ComponentRepairStatus::Replaced,
            "Camera_1",
        )]),
        ReworkMainboard => service.rework_mainboard(),
        RoFirmwareUpdateComplete => service.ro_firmware_update_complete(),
        ShutdownForRestock => service.shutdown_for_restock(),
        ContinueFinalizationAfterRestock => service.continue_finalization_after_restock(),
        SetDeviceInformation => service.set_device_information(&DeviceInformation {
            serial_number: String::from("SN"),
            ..DeviceInformation::default()
        }),
        StartCalibration => service.start_calibration(&[CalibrationComponentStatus::new(
            ComponentType::LidGyroscope,
            CalibrationStatus::Waiting,
            0.0,
        )]),
        RunCalibrationStep => service.run_calibration_step(),
        ContinueCalibration => service.continue_calibration(),
        CalibrationComplete => service.calibration_complete(),
        RetryProvisioning => service.retry_provisioning(),
        ProvisioningComplete => service.provisioning_complete(),
        WriteProtectManuallyEnabled => service.write_protect_manually_enabled(),
        RetryFinalization => service.retry_finalization(),
        FinalizationComplete => service.finalization_complete(),
        EndRma => service.end_rma(ShutdownMethod::Shutdown),
    }
}

fn arbitrary_state() -> impl Strategy<Value = RmaState> {
    prop::sample::select(RmaState::ALL)
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL)
}

prop_compose! {
    /// A script whose first entry is where `operation` is legal.
    fn script_for_operation()(
        operation in arbitrary_operation(),
        rest in prop::collection::vec(arbitrary_state(), 1..6),
    ) -> (Operation, Vec<RmaState>) {
        let mut states = vec![operation.required_state()];
        states.extend(rest);
        (operation, states)
    }
}

proptest! {
    #[test]
    fn no_script_never_transitions(
        operations in prop::collection::vec(arbitrary_operation(), 1..20),
        go_back_every in 1usize..5,
    ) {
        let (scheduler, service) = bare_engine();

        for (i, operation) in operations.into_iter().enumerate() {
            let result = if i % go_back_every == 0 {
                settle(&scheduler, service.transition_previous_state())
            } else {
                settle(&scheduler, invoke(&service, operation))
            };
            prop_assert_eq!(result, StateResult::rma_not_required());
        }

        prop_assert_eq!(
            settle(&scheduler, service.get_current_state()),
            StateResult::rma_not_required()
        );
        prop_assert!(service.history().is_empty());
    }

    #[test]
    fn rejected_requests_change_nothing(
        states in prop::collection::vec(arbitrary_state(), 1..8),
        operations in prop::collection::vec(arbitrary_operation(), 1..20),
    ) {
        let (scheduler, service) = engine();
        service.set_states(Script::from_states(states));

        for operation in operations {
            let before = settle(&scheduler, service.get_current_state());
            let moves_before = service.history().transitions().len();

            let result = settle(&scheduler, invoke(&service, operation));

            if result.error == ErrorCode::RequestInvalid {
                prop_assert_eq!(result.state, before.state);
                prop_assert_eq!(settle(&scheduler, service.get_current_state()), before);
                prop_assert_eq!(service.history().transitions().len(), moves_before);
            }
        }
    }

    #[test]
    fn empty_fields_are_always_rejected(states in prop::collection::vec(arbitrary_state(), 2..8)) {
        let (scheduler, service) = engine();
        let mut script = vec![RmaState::SelectComponents];
        script.extend(states);
        service.set_states(Script::from_states(script));

        let result = settle(&scheduler, service.set_component_list(&[]));

        prop_assert_eq!(result.state, RmaState::SelectComponents);
        prop_assert_eq!(result.error, ErrorCode::RequestInvalid);
    }

    #[test]
    fn one_undo_per_forward_step((operation, states) in script_for_operation()) {
        let (scheduler, service) = engine();
        let origin = states[0];
        service.set_states(Script::from_states(states.clone()));

        let forward = settle(&scheduler, invoke(&service, operation));
        prop_assert_eq!(forward.state, states[1]);
        prop_assert_eq!(forward.error, ErrorCode::Ok);

        let back = settle(&scheduler, service.transition_previous_state());
        prop_assert_eq!(back, StateResult::ok(origin));

        let again = settle(&scheduler, service.transition_previous_state());
        prop_assert_eq!(again.state, origin);
        prop_assert_eq!(again.error, ErrorCode::TransitionFailed);
        prop_assert_eq!(settle(&scheduler, service.get_current_state()).state, origin);
    }

    #[test]
    fn every_handle_receives_each_notification_in_order(
        handles in 1usize..8,
        delay_ms in 0u64..1_000,
    ) {
        let (scheduler, service) = engine();
        let log = Arc::new(Mutex::new(Vec::new()));
        for id in 0..handles {
            let sink = Arc::clone(&log);
            service.observe_error(move |error: ErrorCode| sink.lock().push((id, error)));
        }

        service.trigger_error_observer(ErrorCode::CannotSaveLog, Duration::from_millis(delay_ms));
        prop_assert!(log.lock().is_empty());

        scheduler.run_until_idle();
        let expected: Vec<_> = (0..handles).map(|id| (id, ErrorCode::CannotSaveLog)).collect();
        prop_assert_eq!(log.lock().clone(), expected);
    }

    #[test]
    fn setters_are_idempotent(first in 0usize..64, second in 0usize..64) {
        let (scheduler, service) = engine();

        service.set_get_original_sku_result(first);
        prop_assert_eq!(settle(&scheduler, service.get_original_sku()), Some(first));
        prop_assert_eq!(settle(&scheduler, service.get_original_sku()), Some(first));

        service.set_get_original_sku_result(second);
        prop_assert_eq!(settle(&scheduler, service.get_original_sku()), Some(second));
    }

    #[test]
    fn guard_accepts_only_the_required_state(
        operation in arbitrary_operation(),
        state in arbitrary_state(),
    ) {
        let guard = operation.guard();
        prop_assert_eq!(guard.check(&state), state == operation.required_state());
    }

    #[test]
    fn history_record_is_pure(from in arbitrary_state(), to in arbitrary_state()) {
        let history = StateHistory::new();

        let recorded = history.record(StateTransition::forward(from, to));

        prop_assert_eq!(history.transitions().len(), 0);
        prop_assert_eq!(recorded.transitions().len(), 1);
        prop_assert_eq!(recorded.path(), vec![&from, &to]);
    }

    #[test]
    fn script_json_roundtrip(states in prop::collection::vec(arbitrary_state(), 0..10)) {
        let script = Script::from_states(states);
        let json = serde_json::to_string(&script).unwrap();
        let parsed = Script::from_json(&json).unwrap();
        prop_assert_eq!(script, parsed);
    }
}
