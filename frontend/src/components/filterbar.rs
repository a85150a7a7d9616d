use crate::user_config::{
    SortBy, SortOrder, UserConfig, UserConfigPatch, ViewStyle, GRID_ITEMS_MAX, GRID_ITEMS_MIN,
};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

// Reads "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

/// New grid density after a +/- click, or `None` at the bounds.
pub fn adjust_grid_items(current: u8, increase: bool) -> Option<u8> {
    let next = if increase {
        current.checked_add(1)?
    } else {
        current.checked_sub(1)?
    };
    (GRID_ITEMS_MIN..=GRID_ITEMS_MAX).contains(&next).then_some(next)
}

#[derive(Properties, PartialEq)]
pub struct FilterbarProps {
    pub hide_toggle_text: AttrValue,
    pub config: UserConfig,
    pub on_change: Callback<UserConfigPatch>,
}

#[function_component(Filterbar)]
pub fn filterbar(props: &FilterbarProps) -> Html {
    let config = &props.config;

    let on_hide_watched = {
        let on_change = props.on_change.clone();
        let hide_watched = config.hide_watched;
        Callback::from(move |_: Event| {
            on_change.emit(UserConfigPatch {
                hide_watched: Some(!hide_watched),
                ..Default::default()
            });
        })
    };

    let on_sort_by = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sort_by) = event_value(&e).as_deref().and_then(SortBy::from_key) {
                on_change.emit(UserConfigPatch {
                    sort_by: Some(sort_by),
                    ..Default::default()
                });
            }
        })
    };

    let on_sort_order = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(order) = event_value(&e).as_deref().and_then(SortOrder::from_key) {
                on_change.emit(UserConfigPatch {
                    sort_order: Some(order),
                    ..Default::default()
                });
            }
        })
    };

    let view_style_button = |view_style: ViewStyle| {
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_change.emit(UserConfigPatch {
                view_style_home: Some(view_style),
                ..Default::default()
            });
        });
        let selected = config.view_style_home == view_style;
        html! {
            <button class={classes!("view-style-button", selected.then_some("selected"))} {onclick}>
                { view_style.as_str() }
            </button>
        }
    };

    let grid_button = |increase: bool| {
        let next = adjust_grid_items(config.grid_items, increase);
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(grid_items) = next {
                on_change.emit(UserConfigPatch {
                    grid_items: Some(grid_items),
                    ..Default::default()
                });
            }
        });
        html! {
            <button class="grid-density-button" disabled={next.is_none()} {onclick}>
                { if increase { "+" } else { "-" } }
            </button>
        }
    };

    html! {
        <div class="view-controls">
            <div class="toggle">
                <span>{ props.hide_toggle_text.to_string() }</span>
                <input
                    type="checkbox"
                    id="hide_watched"
                    checked={config.hide_watched}
                    onchange={on_hide_watched}
                />
            </div>
            <div class="sort">
                <select value={config.sort_by.as_str()} onchange={on_sort_by}>
                    { for SortBy::all_variants().into_iter().map(|sort_by| html! {
                        <option value={sort_by.as_str()} selected={sort_by == config.sort_by}>
                            { sort_by.display_name() }
                        </option>
                    })}
                </select>
                <select value={config.sort_order.as_str()} onchange={on_sort_order}>
                    <option value="asc" selected={config.sort_order == SortOrder::Asc}>
                        { SortOrder::Asc.display_name() }
                    </option>
                    <option value="desc" selected={config.sort_order == SortOrder::Desc}>
                        { SortOrder::Desc.display_name() }
                    </option>
                </select>
            </div>
            <div class="view-icons">
                { view_style_button(ViewStyle::Grid) }
                { view_style_button(ViewStyle::List) }
                {
                    if config.view_style_home == ViewStyle::Grid {
                        html! {
                            <>
                                { grid_button(false) }
                                { grid_button(true) }
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_density_stays_in_bounds() {
        assert_eq!(adjust_grid_items(3, true), Some(4));
        assert_eq!(adjust_grid_items(4, false), Some(3));
        assert_eq!(adjust_grid_items(GRID_ITEMS_MIN, false), None);
        assert_eq!(adjust_grid_items(GRID_ITEMS_MAX, true), None);
    }
}
