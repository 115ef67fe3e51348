use leptos::prelude::*;

/// One entry of a [`TabStrip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub value: String,
    pub label: String,
    /// Optional counter shown next to the label
    pub count: Option<usize>,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Row of tabs; the active one is decided by the caller
#[component]
pub fn TabStrip(
    tabs: Vec<TabItem>,
    #[prop(into)] active: String,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tab-strip" role="tablist">
            {tabs.into_iter().map(|tab| {
                let is_active = tab.value == active;
                let value = tab.value.clone();
                view! {
                    <div
                        class="tab"
                        class:active=is_active
                        role="tab"
                        aria-selected=is_active.to_string()
                        on:click=move |_| on_select.run(value.clone())
                    >
                        <span>{tab.label}</span>
                        {tab.count.map(|count| view! { <span class="tab__count">{count}</span> })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
