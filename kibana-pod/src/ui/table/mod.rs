//! Table renderers for pod lists and presets.

mod pod_list_ext;
mod preset_ext;

pub use self::{pod_list_ext::PodListExt, preset_ext::PresetExt};

fn new_table<H, R>(header: H, rows: R) -> String
where
    H: Into<comfy_table::Row>,
    R: IntoIterator,
    R::Item: Into<comfy_table::Row>,
{
    comfy_table::Table::new()
        .load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
        .set_header(header)
        .add_rows(rows)
        .to_string()
}
