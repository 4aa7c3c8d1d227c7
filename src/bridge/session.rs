use crate::bridge::messages::{Request, Response};
use crate::node::Node;
use crate::renderer::OutlineRenderer;

/// Read-only view of the host document: the current selection and the page
/// root. The host (or a recorded snapshot of it) sits behind this trait.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    fn selection(&self) -> Vec<Node>;
    fn page(&self) -> Node;
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Push one render as soon as the UI opens, before any request arrives.
    pub render_on_open: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render_on_open: true,
        }
    }
}

/// What the embedder should do after a request has been handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Respond(Response),
    Shutdown,
}

/// One plugin session: owns the document source and the render-on-open
/// configuration. The embedder calls `open` once, then `handle` per message.
pub struct Session<S: DocumentSource> {
    source: S,
    config: SessionConfig,
    renderer: OutlineRenderer,
}

impl<S: DocumentSource> Session<S> {
    pub fn new(source: S, config: SessionConfig) -> Self {
        Self {
            source,
            config,
            renderer: OutlineRenderer,
        }
    }

    /// Called once by the embedder when the UI opens.
    pub fn open(&self) -> Option<Response> {
        if self.config.render_on_open {
            Some(self.render_response())
        } else {
            None
        }
    }

    pub fn handle(&self, request: Request) -> Outcome {
        match request {
            Request::Preview => Outcome::Respond(self.render_response()),
            Request::Close => Outcome::Shutdown,
        }
    }

    /// Root policy: a non-empty selection is the root list; an empty one
    /// falls back to the whole page as a single root.
    pub fn render_from_selection_or_page(&self) -> String {
        let selection = self.source.selection();
        let roots = if selection.is_empty() {
            vec![self.source.page()]
        } else {
            selection
        };

        tracing::debug!(roots = roots.len(), "rendering outline");
        self.renderer.render(&roots)
    }

    fn render_response(&self) -> Response {
        Response::Render {
            text: self.render_from_selection_or_page(),
        }
    }
}
