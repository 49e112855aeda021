use crate::actions::Prompter;
use crate::model::{ModelEvent, ScanModel};
use crate::results::ResultStore;
use crate::search::{self, FindOutcome, SearchError};

/// Asks for a query and lets the user browse through all results containing it.
pub fn find(model: &mut ScanModel, prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    let Some(query) = prompter.ask_query(model.find_session().last_query()) else {
        return Ok(());
    };

    let (results, selection, session) = model.parts();
    let mut position = match session.begin(results, selection, &query) {
        Ok(position) => position,
        Err(SearchError::NoMatchesFound(query)) => {
            prompter.notify_no_matches(&query);
            model.emit(ModelEvent::NoMatch(format!("No hosts contain {:?}", query)));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    prompter.notify_found(&query, position.total);

    loop {
        model.emit(ModelEvent::SearchPosition { current: position.current, total: position.total });
        let signal = prompter.browse(position, model.results().get(position.index));
        let (_, selection, session) = model.parts();
        match session.handle(selection, signal)? {
            Some(p) => position = p,
            None => break,
        }
    }
    Ok(())
}

/// Selects the next result containing the query, offering to restart from the top.
pub fn find_next(model: &mut ScanModel, prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    let Some(query) = prompter.ask_query(model.find_session().last_query()) else {
        return Ok(());
    };

    let (results, selection, session) = model.parts();
    session.remember_query(&query);
    let outcome = search::find_next(results, selection, &query, || prompter.confirm_restart(&query));
    if outcome == FindOutcome::NotFound {
        prompter.notify_no_matches(&query);
        model.emit(ModelEvent::NoMatch(format!("No more hosts contain {:?}", query)));
    }
    Ok(())
}
