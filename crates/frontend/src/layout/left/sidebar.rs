//! Sidebar listing every module that has a registered config

use crate::app::use_services;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: String,
    label: String,
    icon: String,
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let services = use_services();

    let items: Vec<MenuItem> = services
        .engine
        .registry()
        .module_ids()
        .into_iter()
        .filter_map(|id| {
            let config = services.engine.resolve_config(id.as_str())?;
            Some(MenuItem {
                id: id.to_string(),
                label: config.title.clone(),
                icon: config.icon.clone().unwrap_or_else(|| "item".to_string()),
            })
        })
        .collect();

    view! {
        <div class="app-sidebar__content">
            {items.into_iter().map(|item| {
                let item_id = StoredValue::new(item.id.clone());
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || {
                            let iid = item_id.get_value();
                            ctx.active_module.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                        }
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_module(&item_id.get_value())
                    >
                        <div class="app-sidebar__item-content">
                            {icon(&item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
