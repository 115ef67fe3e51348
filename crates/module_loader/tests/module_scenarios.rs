use std::sync::Arc;

use contracts::shared::record::Record;

use module_loader::{
    DataSource, ExtraContentRenderer, ExtraContext, InMemoryDataLayer, LoaderOutput, ModuleEngine,
    RenderContract, TabSetter, ViewEvent, ViewState, ViewStateMachine,
};
use parking_lot::Mutex;
use serde_json::json;

fn engine() -> ModuleEngine<String> {
    ModuleEngine::builtin().expect("builtin engine")
}

fn data() -> InMemoryDataLayer {
    InMemoryDataLayer::with_mock_data().expect("mock data")
}

fn open(engine: &ModuleEngine<String>, machine: &mut ViewStateMachine, module: &str) {
    machine.handle(ViewEvent::ModuleChanged(module.into()));
    engine.settle(machine);
}

fn contract(
    engine: &ModuleEngine<String>,
    machine: &ViewStateMachine,
    data: &dyn DataSource,
) -> RenderContract<String> {
    engine
        .render(machine.state(), data)
        .into_contract()
        .expect("module should be ready")
}

#[test]
fn inventory_defaults_to_all_then_filters_by_category() {
    let engine = engine();
    let data = data();
    let mut machine = ViewStateMachine::new();

    open(&engine, &mut machine, "inventory");
    let first = contract(&engine, &machine, &data);
    assert_eq!(first.tab, "all");
    assert_eq!(first.dataset, data.collection("inventory").unwrap());

    machine.handle(ViewEvent::TabChanged("Raw Materials".to_string()));
    let filtered = contract(&engine, &machine, &data);
    assert_eq!(filtered.dataset.len(), 3);
    assert!(filtered
        .dataset
        .iter()
        .all(|r| r["category"] == "Raw Materials"));
    // the config of a simple module does not change with the tab
    assert_eq!(filtered.config, first.config);
}

#[test]
fn crm_switches_config_and_dataset_together() {
    let engine = engine();
    let data = data();
    let mut machine = ViewStateMachine::new();

    open(&engine, &mut machine, "crm");
    let leads = contract(&engine, &machine, &data);
    assert_eq!(leads.tab, "leads");
    assert_eq!(leads.sub_view.as_deref(), Some("leads"));
    assert_eq!(
        &leads.config,
        engine.resolve_config("crm").unwrap().view("leads").unwrap()
    );
    assert_eq!(leads.dataset, data.collection("leads").unwrap());

    machine.handle(ViewEvent::TabChanged("customers".to_string()));
    let customers = contract(&engine, &machine, &data);
    assert_eq!(customers.config.title, "Customers");
    assert_eq!(customers.dataset, data.collection("customers").unwrap());

    machine.handle(ViewEvent::TabChanged("leads".to_string()));
    let back = contract(&engine, &machine, &data);
    assert_eq!(back.config, leads.config);
    assert_eq!(back.dataset, leads.dataset);
}

#[test]
fn crm_unknown_tab_falls_back_to_leads() {
    let engine = engine();
    let data = data();
    let mut machine = ViewStateMachine::new();

    open(&engine, &mut machine, "crm");
    machine.handle(ViewEvent::TabChanged("partners".to_string()));
    let contract = contract(&engine, &machine, &data);

    assert_eq!(contract.tab, "partners");
    assert_eq!(contract.sub_view.as_deref(), Some("leads"));
    assert_eq!(contract.dataset, data.collection("leads").unwrap());
}

#[test]
fn purchasing_round_trip_between_views() {
    let engine = engine();
    let data = data();
    let mut machine = ViewStateMachine::new();

    open(&engine, &mut machine, "purchasing");
    let orders = contract(&engine, &machine, &data);
    assert_eq!(orders.tab, "orders");
    assert_eq!(orders.dataset.len(), 4);

    machine.handle(ViewEvent::TabChanged("suppliers".to_string()));
    let suppliers = contract(&engine, &machine, &data);
    assert_eq!(suppliers.config.title, "Suppliers");
    assert_eq!(suppliers.dataset.len(), 3);

    machine.handle(ViewEvent::TabChanged("orders".to_string()));
    let again = contract(&engine, &machine, &data);
    assert_eq!(again.config, orders.config);
    assert_eq!(again.dataset, orders.dataset);
}

#[test]
fn simple_modules_resolve_stably() {
    let engine = engine();
    let data = data();

    for module in ["inventory", "production", "sales"] {
        let mut machine = ViewStateMachine::new();
        open(&engine, &mut machine, module);

        let a = contract(&engine, &machine, &data);
        let b = contract(&engine, &machine, &data);
        assert_eq!(a.config, b.config, "{module}");
        assert_eq!(a.dataset, b.dataset, "{module}");
        assert_eq!(
            engine.resolve_config(module),
            engine.resolve_config(module),
            "{module}"
        );
    }
}

#[test]
fn unregistered_module_is_not_ready_and_reads_no_data() {
    struct Panicking;
    impl DataSource for Panicking {
        fn collection(&self, name: &str) -> Option<Vec<Record>> {
            panic!("dataset for '{name}' must not be resolved");
        }
    }

    let engine = engine();
    let mut machine = ViewStateMachine::new();
    open(&engine, &mut machine, "payroll");

    assert!(engine.resolve_config("payroll").is_none());
    assert!(matches!(machine.state(), ViewState::Resolving { .. }));
    assert!(matches!(
        engine.render(machine.state(), &Panicking),
        LoaderOutput::NotReady { .. }
    ));
}

#[test]
fn extra_content_drives_tab_changes() {
    let mut engine = engine();
    engine.register_extra(
        "inventory",
        ExtraContentRenderer::new(|ctx: ExtraContext<'_>| {
            format!("{} items on {}", ctx.dataset.len(), ctx.tab)
        }),
    );
    let data = data();
    let machine = Arc::new(Mutex::new(ViewStateMachine::new()));
    {
        let mut m = machine.lock();
        open(&engine, &mut m, "inventory");
    }

    let setter_machine = Arc::clone(&machine);
    let set_tab = TabSetter::new(move |tab| setter_machine.lock().select_tab(tab));

    let first = contract(&engine, &machine.lock(), &data);
    assert_eq!(first.render_extra(&set_tab).as_deref(), Some("8 items on all"));

    set_tab.set("Finished Goods");
    let second = contract(&engine, &machine.lock(), &data);
    assert_eq!(second.render_extra(&set_tab).as_deref(), Some("2 items on Finished Goods"));
}

#[test]
fn created_record_shows_up_on_next_resolution() {
    let engine = engine();
    let data = data();
    let mut machine = ViewStateMachine::new();
    open(&engine, &mut machine, "purchasing");
    let before = contract(&engine, &machine, &data).dataset.len();

    data.create_record(
        "purchase_orders",
        json!({
            "number": "PO-1005",
            "supplier": "Elektron GmbH",
            "order_date": "2024-04-01",
            "status": "draft",
            "total": 120.0
        }),
    )
    .unwrap();

    assert_eq!(contract(&engine, &machine, &data).dataset.len(), before + 1);
}
