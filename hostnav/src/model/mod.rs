use crossbeam_channel::Sender;

use crate::results::ScanResultList;
use crate::search::TextSearchSession;
use crate::utils::event_emitter::EventEmitter;
use crate::view::ResultView;

#[derive(Debug, PartialEq, Eq)]
pub enum ModelEvent {
    SelectionChanged(Option<usize>),
    SelectionShown(Option<usize>),
    NoMatch(String),
    SearchPosition { current: usize, total: usize },
    Help,
    Quit,
}

/// Selection of the result list that reports every change to the host.
pub struct TableSelection {
    model_sender: Sender<ModelEvent>,
    index: Option<usize>,
}

impl TableSelection {
    pub fn new(model_sender: Sender<ModelEvent>) -> Self {
        TableSelection {
            model_sender,
            index: None,
        }
    }

    fn set(&mut self, index: Option<usize>) {
        if self.index != index {
            self.index = index;
            self.model_sender.emit_event(ModelEvent::SelectionChanged(index));
        }
    }
}

impl ResultView for TableSelection {
    fn selection(&self) -> Option<usize> {
        self.index
    }

    fn select(&mut self, index: usize) {
        self.set(Some(index))
    }

    fn deselect_all(&mut self) {
        self.set(None)
    }
}

pub struct ScanModel {
    model_sender: Sender<ModelEvent>,
    results: ScanResultList,
    selection: TableSelection,
    find_session: TextSearchSession,
}

impl ScanModel {
    pub fn new(model_sender: Sender<ModelEvent>, results: ScanResultList) -> Self {
        ScanModel {
            selection: TableSelection::new(model_sender.clone()),
            model_sender,
            results,
            find_session: TextSearchSession::new(),
        }
    }

    pub fn results(&self) -> &ScanResultList {
        &self.results
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selection()
    }

    pub fn find_session(&self) -> &TextSearchSession {
        &self.find_session
    }

    /// Splits the model into the parts used together by navigation and search.
    pub fn parts(&mut self) -> (&ScanResultList, &mut TableSelection, &mut TextSearchSession) {
        (&self.results, &mut self.selection, &mut self.find_session)
    }

    pub fn emit(&self, evt: ModelEvent) {
        self.model_sender.emit_event(evt);
    }
}
