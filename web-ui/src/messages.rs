// User-facing message strings for the wizard UI

use lilipad_core::ExportGate;

/// Alert text shown when the archive download fails for any reason
pub const DOWNLOAD_FAILED_ALERT: &str = "Download failed. Please try again.";

/// Get the hint shown under the Next button while export is gated
///
/// A collection below the minimum size shows no hint; the disabled
/// button is the only signal
pub fn export_gate_hint(gate: ExportGate) -> Option<&'static str> {
    match gate {
        // エクスポート可能（ヒントなし）
        ExportGate::Ready | ExportGate::TooFewItems => None,

        // 保存・入力待ち (WARNING)
        ExportGate::UnsavedItems => Some("Save all NFT details to continue"),
        ExportGate::BlankAttributeValues => {
            Some("Fill in all attribute values for each NFT to continue")
        }
    }
}

/// Get the placeholder for the details pane when no item is being edited
pub fn details_pane_hint(can_edit: bool) -> &'static str {
    if can_edit {
        "Select an NFT to edit its properties"
    } else {
        "Fill in collection name and description to edit NFTs"
    }
}
