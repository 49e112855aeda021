use crate::actions::{find, goto, Prompter};
use crate::model::{ModelEvent, ScanModel};

pub type ActionFn = fn(model: &mut ScanModel, prompter: &mut dyn Prompter) -> anyhow::Result<()>;

pub struct ActionImpl {
    pub id: &'static str,
    pub action_impl: ActionFn,
}

pub static REGISTRY: &[ActionImpl] = &[
    ActionImpl { id: "next_alive_host", action_impl: goto::next_alive_host },
    ActionImpl { id: "prev_alive_host", action_impl: goto::prev_alive_host },
    ActionImpl { id: "next_dead_host", action_impl: goto::next_dead_host },
    ActionImpl { id: "prev_dead_host", action_impl: goto::prev_dead_host },
    ActionImpl { id: "next_host_with_info", action_impl: goto::next_host_with_info },
    ActionImpl { id: "prev_host_with_info", action_impl: goto::prev_host_with_info },
    ActionImpl { id: "find", action_impl: find::find },
    ActionImpl { id: "find_next", action_impl: find::find_next },
    ActionImpl { id: "show_selection", action_impl: show_selection },
    ActionImpl { id: "help", action_impl: help },
    ActionImpl { id: "quit", action_impl: quit },
];

pub fn lookup(id: &str) -> Option<&'static ActionImpl> {
    REGISTRY.iter().find(|action_impl| action_impl.id == id)
}

fn show_selection(model: &mut ScanModel, _prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    let evt = ModelEvent::SelectionShown(model.selected_index());
    model.emit(evt);
    Ok(())
}

fn help(model: &mut ScanModel, _prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    model.emit(ModelEvent::Help);
    Ok(())
}

fn quit(model: &mut ScanModel, _prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    model.emit(ModelEvent::Quit);
    Ok(())
}
