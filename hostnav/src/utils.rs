pub mod event_emitter {
    use std::fmt::Debug;
    use crossbeam_channel::Sender;

    pub trait EventEmitter<T: Debug> {
        /// Convenient method for crossbeam_channel::Sender::send
        fn emit_event(&self, evt: T);
    }

    impl<T: Debug> EventEmitter<T> for Sender<T> {
        fn emit_event(&self, evt: T) {
            if let Err(e) = self.send(evt) {
                log::warn!("Event dropped, receiver is gone: {:?}", e.into_inner());
            }
        }
    }
}
