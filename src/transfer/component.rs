//! The transfer control: props, state and the change callback

use crate::transfer::props::TransferProps;
use crate::transfer::state::{TransferEvent, TransferState};

type ChangeCallback = Box<dyn FnMut(&[String])>;

/// Owns the props and state of one control and dispatches events to it
pub struct TreeTransfer {
    props: TransferProps,
    state: TransferState,
    on_change: Option<ChangeCallback>,
}

impl TreeTransfer {
    pub fn new(props: TransferProps) -> Self {
        let state = TransferState::new(&props);
        tracing::debug!(
            "Transfer created: {} leaves, {} targeted",
            state.leaf_keys().len(),
            state.list_data().len()
        );
        Self {
            props,
            state,
            on_change: None,
        }
    }

    /// Register the callback fired by the move buttons
    pub fn on_change(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &TransferProps {
        &self.props
    }

    pub fn state(&self) -> &TransferState {
        &self.state
    }

    /// Replace the props and rebuild derived data
    pub fn set_props(&mut self, props: TransferProps) {
        self.props = props;
        self.dispatch(TransferEvent::PropsChanged);
    }

    /// Replace only the target set, as owners do in response to a change
    pub fn set_target(&mut self, target: Vec<String>) {
        self.props.target = target;
        self.dispatch(TransferEvent::PropsChanged);
    }

    /// Apply an event; returns the new target set if one was announced
    pub fn dispatch(&mut self, event: TransferEvent) -> Option<Vec<String>> {
        tracing::debug!("Dispatch {:?}", event);
        let transition = self.state.reduce(&self.props, event);
        self.state = transition.state;

        if let Some(keys) = &transition.change {
            tracing::info!("Target change: {} keys", keys.len());
            if let Some(callback) = self.on_change.as_mut() {
                callback(keys);
            }
        }
        transition.change
    }
}
