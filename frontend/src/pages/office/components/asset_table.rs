use crate::{api::Asset, components::status_badge::AssetStatusBadge};
use leptos::*;

const HEAD_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg-muted";

#[component]
pub fn AssetTable(
    assets: Vec<Asset>,
    on_move: Callback<Asset>,
    on_edit: Callback<Asset>,
    on_delete: Callback<Asset>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead>
                <tr>
                    <th class=HEAD_CLASS>"Name"</th>
                    <th class=HEAD_CLASS>"Serial"</th>
                    <th class=HEAD_CLASS>"Inventory"</th>
                    <th class=HEAD_CLASS>"Status"</th>
                    <th class="px-6 py-3 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {assets
                    .into_iter()
                    .map(|asset| {
                        let for_move = asset.clone();
                        let for_edit = asset.clone();
                        let for_delete = asset.clone();
                        view! {
                            <tr class="hover:bg-surface-muted" data-asset-id=asset.id.clone()>
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-fg">{asset.name}</td>
                                <td class=CELL_CLASS>{asset.serial}</td>
                                <td class=CELL_CLASS>{asset.inventory}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                    <AssetStatusBadge status=asset.status/>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-4">
                                    <button
                                        type="button"
                                        title="Move to another office"
                                        class="text-yellow-500 hover:text-yellow-400"
                                        on:click=move |_| on_move.call(for_move.clone())
                                    >
                                        <i class="fas fa-exchange-alt"></i>
                                    </button>
                                    <button
                                        type="button"
                                        title="Edit"
                                        class="text-blue-500 hover:text-blue-400"
                                        on:click=move |_| on_edit.call(for_edit.clone())
                                    >
                                        <i class="fas fa-edit"></i>
                                    </button>
                                    <button
                                        type="button"
                                        title="Delete"
                                        class="text-red-500 hover:text-red-400"
                                        on:click=move |_| on_delete.call(for_delete.clone())
                                    >
                                        <i class="fas fa-trash"></i>
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_asset;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_one_row_per_asset_with_actions() {
        let assets = vec![
            sample_asset("a1", "Laptop", "o1"),
            sample_asset("a2", "Monitor", "o1"),
        ];
        let html = render_to_string(move || {
            view! {
                <AssetTable
                    assets=assets
                    on_move=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("data-asset-id=\"a1\""));
        assert!(html.contains("data-asset-id=\"a2\""));
        assert!(html.contains("Monitor"));
        assert!(html.contains("Move to another office"));
        assert_eq!(html.matches("title=\"Delete\"").count(), 2);
    }
}
