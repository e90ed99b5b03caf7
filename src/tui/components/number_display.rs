//! Number display component
//!
//! The one real widget in this app: shows an integer inside a bordered
//! container and fires a callback when the container is clicked. The click
//! handler is bound at the container level, so a press on the inner
//! paragraph activates it too - events bubble from descendants.
//!
//! The component is stateless: its output is a pure function of the props
//! (`num_to_show` and `on_click`) it currently holds. The host replaces the
//! number between renders; nothing accumulates inside.

use crate::tui::traits::{Clickable, Component, ComponentId, Handled, RenderContext};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Addressable nodes inside the rendered structure
///
/// Automation and tests address the two nodes independently: the container
/// carries the click binding, the paragraph carries the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeId {
    /// Outer interactive element (receives the click binding)
    Container,
    /// Inner text element (content is the number's decimal form)
    Paragraph,
}

impl NodeId {
    /// Stable identifier string for automation harnesses
    ///
    /// Consumed only by tests and external tooling, never by render code
    #[allow(dead_code)]
    pub fn test_id(&self) -> &'static str {
        match self {
            NodeId::Container => "container",
            NodeId::Paragraph => "paragraph",
        }
    }
}

/// The clickable number display
///
/// Props are immutable per render: `num_to_show` is the value shown,
/// `on_click` is invoked exactly once per activation. No debouncing and no
/// guard against rapid repeated activation.
pub struct NumberDisplay {
    num_to_show: i64,
    on_click: Box<dyn FnMut()>,
}

impl NumberDisplay {
    pub fn new(num_to_show: i64, on_click: impl FnMut() + 'static) -> Self {
        Self {
            num_to_show,
            on_click: Box::new(on_click),
        }
    }

    /// The currently displayed value
    pub fn number(&self) -> i64 {
        self.num_to_show
    }

    /// Replace the displayed value (host-driven prop change)
    pub fn set_number(&mut self, num_to_show: i64) {
        self.num_to_show = num_to_show;
    }

    /// Resolve a node's rectangle within the component's assigned area
    ///
    /// The container is the full assigned area; the paragraph is the
    /// container's interior (inside the border), which makes it a sub-rect
    /// of the container.
    pub fn node_area(&self, node: NodeId, area: Rect) -> Rect {
        match node {
            NodeId::Container => area,
            NodeId::Paragraph => Self::frame_block().inner(area),
        }
    }

    /// Size the container wants: the number plus border and padding
    pub fn preferred_size(&self) -> (u16, u16) {
        let text_width = self.num_to_show.to_string().len() as u16;
        // 2 for borders, 2 per side of padding; 1 content row between borders
        (text_width + 6, 3)
    }

    /// The unstyled container frame - shared by render and node_area so the
    /// paragraph rect never drifts from what is actually drawn
    fn frame_block() -> Block<'static> {
        Block::default().borders(Borders::ALL)
    }
}

impl Default for NumberDisplay {
    /// Default props: number 3, no-op callback
    fn default() -> Self {
        Self::new(3, || {})
    }
}

impl Component for NumberDisplay {
    fn id(&self) -> ComponentId {
        ComponentId::NumberDisplay
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut style = Style::default().fg(ctx.theme.foreground);
        if ctx.use_theme_background {
            style = style.bg(ctx.theme.background);
        }

        let block = Self::frame_block()
            .border_style(Style::default().fg(ctx.theme.border))
            .title(" numshow ")
            .title_style(Style::default().fg(ctx.theme.title))
            .style(style);

        let paragraph = Paragraph::new(self.num_to_show.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(ctx.theme.number)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = self.node_area(NodeId::Paragraph, area);
        f.render_widget(block, area);
        f.render_widget(paragraph, inner);
    }
}

impl Clickable for NumberDisplay {
    /// Invoke the callback on a left-button press inside the container
    ///
    /// Hit-testing is against the container rect, so presses on the
    /// paragraph activate too. One press, one invocation.
    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Handled {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Handled::No;
        }

        let pos = Position::new(mouse.column, mouse.row);
        if !self.node_area(NodeId::Container, area).contains(pos) {
            return Handled::No;
        }

        (self.on_click)();
        Handled::Yes
    }
}
