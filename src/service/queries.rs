//! Pure queries and their canned answers.
//!
//! A query never touches the workflow. It answers with whatever its paired
//! `set_*_result` setter last installed, or `None` if nothing was installed
//! yet. Setters persist until overwritten or until [`RmaService::reset`].

use super::{Pending, RmaService};
use crate::core::ErrorCode;
use crate::domain::{
    CalibrationComponentStatus, CalibrationSetupInstruction, Component, FeatureLevel,
    OsUpdateCheck, SaveLogResponse, ShutdownMethod, WriteProtectDisableCompleteAction,
};
use tracing::info;

/// Generates the override table plus a query and a setter per entry.
macro_rules! canned_queries {
    ($(
        $(#[$meta:meta])*
        $field:ident: $ty:ty => $query:ident, $setter:ident;
    )*) => {
        #[derive(Clone, Debug, Default)]
        pub(super) struct Overrides {
            $( pub(super) $field: Option<$ty>, )*
        }

        impl RmaService {
            $(
                $(#[$meta])*
                pub fn $query(&self) -> Pending<Option<$ty>> {
                    let value = self.inner.overrides.lock().$field.clone();
                    self.resolve(stringify!($query), value)
                }

                pub fn $setter(&self, value: $ty) {
                    self.inner.overrides.lock().$field = Some(value);
                }
            )*
        }
    };
}

canned_queries! {
    /// Error code reported when the repair is abandoned.
    abort_rma: ErrorCode => abort_rma, set_abort_rma_result;
    current_os_version: String => get_current_os_version, set_get_current_os_version_result;
    check_for_os_updates: OsUpdateCheck => check_for_os_updates, set_check_for_os_updates_result;
    /// Whether an OS update was started.
    update_os: bool => update_os, set_update_os_result;

    rsu_challenge: String =>
        get_rsu_disable_write_protect_challenge,
        set_get_rsu_disable_write_protect_challenge_result;
    rsu_hwid: String =>
        get_rsu_disable_write_protect_hwid,
        set_get_rsu_disable_write_protect_hwid_result;
    /// QR code image bytes encoding the challenge URL.
    rsu_challenge_qr_code: Vec<u8> =>
        get_rsu_disable_write_protect_challenge_qr_code,
        set_get_rsu_disable_write_protect_challenge_qr_code_result;
    write_protect_disable_complete_action: WriteProtectDisableCompleteAction =>
        get_write_protect_disable_complete_action,
        set_get_write_protect_disable_complete_action_result;

    component_list: Vec<Component> => get_component_list, set_get_component_list_result;
    region_list: Vec<String> => get_region_list, set_get_region_list_result;
    sku_list: Vec<u64> => get_sku_list, set_get_sku_list_result;
    custom_label_list: Vec<String> => get_custom_label_list, set_get_custom_label_list_result;
    sku_description_list: Vec<String> =>
        get_sku_description_list,
        set_get_sku_description_list_result;

    original_serial_number: String =>
        get_original_serial_number,
        set_get_original_serial_number_result;
    /// Index into the region list.
    original_region: usize => get_original_region, set_get_original_region_result;
    /// Index into the SKU list.
    original_sku: usize => get_original_sku, set_get_original_sku_result;
    /// Index into the custom label list.
    original_custom_label: usize =>
        get_original_custom_label,
        set_get_original_custom_label_result;
    original_dram_part_number: String =>
        get_original_dram_part_number,
        set_get_original_dram_part_number_result;
    original_feature_level: FeatureLevel =>
        get_original_feature_level,
        set_get_original_feature_level_result;

    calibration_component_list: Vec<CalibrationComponentStatus> =>
        get_calibration_component_list,
        set_get_calibration_component_list_result;
    calibration_setup_instructions: CalibrationSetupInstruction =>
        get_calibration_setup_instructions,
        set_get_calibration_setup_instructions_result;

    log: String => get_log, set_get_log_result;
    /// Where the log was written, or `CannotSaveLog` / `UsbNotFound`.
    save_log: SaveLogResponse => save_log, set_save_log_result;
    powerwash_required: bool => get_powerwash_required, set_get_powerwash_required_result;
    critical_error_exit_to_login: ErrorCode =>
        critical_error_exit_to_login,
        set_critical_error_exit_to_login_result;
    critical_error_reboot: ErrorCode => critical_error_reboot, set_critical_error_reboot_result;
}

impl RmaService {
    /// Fire-and-forget: the backend powers the device down.
    pub fn shut_down_after_hardware_error(&self, method: ShutdownMethod) {
        info!(?method, "Shutdown after hardware error requested");
    }

    /// Fire-and-forget: the backend opens the diagnostics app.
    pub fn launch_diagnostics(&self) {
        info!("Diagnostics launch requested");
    }
}
