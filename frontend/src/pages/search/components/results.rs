use crate::{api::Asset, components::status_badge::AssetStatusBadge};
use leptos::*;

const HEAD_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg-muted";

pub fn office_label(asset: &Asset) -> String {
    asset
        .office
        .as_ref()
        .map(|o| o.name.clone())
        .unwrap_or_else(|| "-".into())
}

#[component]
pub fn SearchResultsTable(results: Vec<Asset>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead>
                <tr>
                    <th class=HEAD_CLASS>"Name"</th>
                    <th class=HEAD_CLASS>"Serial"</th>
                    <th class=HEAD_CLASS>"Inventory"</th>
                    <th class=HEAD_CLASS>"Status"</th>
                    <th class=HEAD_CLASS>"Office"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {results
                    .into_iter()
                    .map(|asset| {
                        let office = office_label(&asset);
                        view! {
                            <tr class="hover:bg-surface-muted" data-asset-id=asset.id>
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-fg">{asset.name}</td>
                                <td class=CELL_CLASS>{asset.serial}</td>
                                <td class=CELL_CLASS>{asset.inventory}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                    <AssetStatusBadge status=asset.status/>
                                </td>
                                <td class=CELL_CLASS>
                                    <i class="fas fa-building mr-2 text-blue-400"></i>
                                    {office}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
