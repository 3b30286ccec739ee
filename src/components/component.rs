//! The two flavours of renderable component.

use std::convert::Infallible;
use std::fmt::Debug;

use dioxus::logger::tracing::debug;

use super::view::Node;

/// A component with no state. Its tree can't carry actions.
pub trait StatelessComponent {
    fn render(&self) -> Node<Infallible>;
}

/// A component whose state changes only through `reduce`.
///
/// `reduce` and `render` must stay pure: anything that talks to the outside
/// world runs in the host and comes back as another action.
pub trait ReducerComponent {
    type State: Clone + PartialEq + Debug;
    type Action: Clone + Debug;

    fn name(&self) -> &'static str;

    fn initial_state(&self) -> Self::State;

    fn reduce(&self, action: Self::Action, state: Self::State) -> Self::State;

    fn render(&self, state: &Self::State) -> Node<Self::Action>;
}

/// One mounted component and the state it owns.
pub struct Instance<C: ReducerComponent> {
    component: C,
    state: C::State,
}

impl<C: ReducerComponent> Instance<C> {
    pub fn mount(component: C) -> Self {
        let state = component.initial_state();
        Self { component, state }
    }

    pub fn state(&self) -> &C::State {
        &self.state
    }

    pub fn send(&mut self, action: C::Action) {
        let next = self.component.reduce(action.clone(), self.state.clone());
        debug!(
            component = self.component.name(),
            ?action,
            from = ?self.state,
            to = ?next,
            "state transition"
        );
        self.state = next;
    }

    pub fn render(&self) -> Node<C::Action> {
        self.component.render(&self.state)
    }
}
