use crate::actions::Prompter;
use crate::model::{ModelEvent, ScanModel};
use crate::navigation::{Direction, GotoAction, HostFilter, NavigationError};

macro_rules! goto_action {
    ($id: ident, $direction: expr, $filter: expr) => {
        pub fn $id(model: &mut ScanModel, _prompter: &mut dyn Prompter) -> anyhow::Result<()> {
            goto(model, GotoAction::new($direction, $filter));
            Ok(())
        }
    };
}

goto_action!(next_alive_host, Direction::Forward, HostFilter::Alive);
goto_action!(prev_alive_host, Direction::Backward, HostFilter::Alive);
goto_action!(next_dead_host, Direction::Forward, HostFilter::Dead);
goto_action!(prev_dead_host, Direction::Backward, HostFilter::Dead);
goto_action!(next_host_with_info, Direction::Forward, HostFilter::WithInfo);
goto_action!(prev_host_with_info, Direction::Backward, HostFilter::WithInfo);

fn goto(model: &mut ScanModel, action: GotoAction) {
    let (results, selection, _) = model.parts();
    match action.perform(results, selection) {
        Ok(i) => log::trace!("{} selected {}", action, i),
        Err(NavigationError::NoMatchFound) => {
            let msg = format!("No {} hosts", action.filter.result_type());
            model.emit(ModelEvent::NoMatch(msg));
        }
    }
}
