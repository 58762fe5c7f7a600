use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

// --- Operation ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigateOperation {
    /// Ask the host to open `url` in a new navigation context (external
    /// browser or maps app). Fire-and-forget.
    OpenExternal { url: String },
}

impl Operation for NavigateOperation {
    type Output = ();
}

// --- Capability ---

#[derive(Clone)]
pub struct Navigate<Ev> {
    context: CapabilityContext<NavigateOperation, Ev>,
}

impl<Ev> Capability<Ev> for Navigate<Ev> {
    type Operation = NavigateOperation;
    type MappedSelf<MappedEv> = Navigate<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static,
    {
        Navigate::new(self.context.map_event(f))
    }
}

impl<Ev> Navigate<Ev> {
    pub fn new(context: CapabilityContext<NavigateOperation, Ev>) -> Self {
        Self { context }
    }
}

impl<Ev> Navigate<Ev>
where
    Ev: Send + 'static,
{
    pub fn open_external(&self, url: impl Into<String>) {
        let url = url.into();
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(NavigateOperation::OpenExternal { url }).await;
        });
    }
}
