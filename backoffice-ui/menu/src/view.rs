use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::expansion::ExpansionState;
use crate::model::{MenuNode, is_active_or_ancestor_of_active};
use crate::rows::{MenuRow, flatten_menu};

/// What a left press on a row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRowAction {
    /// Leaf item: report the id as the new section.
    Select,
    /// Parent item: flip its expansion flag.
    Toggle,
    /// Divider: nothing.
    Inert,
}

impl MenuRowAction {
    /// Classify a node by the way it reacts to a press.
    pub fn for_node(node: &MenuNode) -> Self {
        if node.is_divider() {
            Self::Inert
        } else if node.has_children() {
            Self::Toggle
        } else {
            Self::Select
        }
    }
}

/// Rendering context passed to row callbacks.
pub struct MenuRowContext<'a> {
    pub row: MenuRow<'a>,
    /// Row is the active section.
    pub is_selected: bool,
    /// Row is the active section or one of its ancestors.
    pub is_on_active_path: bool,
    pub is_hovered: bool,
}

type RowRenderer<'a, Message> =
    dyn Fn(&MenuRowContext<'a>) -> Element<'a, Message> + 'a;
type RowStyle<'a> = dyn Fn(&MenuRowContext<'a>) -> container::Style + 'a;
type IdAction<'a, Message> = dyn Fn(String) -> Message + 'a;
type HoverAction<'a, Message> = dyn Fn(Option<String>) -> Message + 'a;

/// Sidebar menu built from a [`MenuNode`] forest and an [`ExpansionState`].
pub struct MenuView<'a, Message: Clone + 'a> {
    nodes: &'a [MenuNode],
    expansion: &'a ExpansionState,
    active: Option<&'a str>,
    hovered: Option<&'a str>,
    on_select: Option<Box<IdAction<'a, Message>>>,
    on_toggle: Option<Box<IdAction<'a, Message>>>,
    on_hover: Option<Box<HoverAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, Message>>,
    row_style: Option<Box<RowStyle<'a>>>,
    spacing: f32,
    indent_width: f32,
}

impl<'a, Message> MenuView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a menu view that renders each visible row using `render_row`.
    pub fn new(
        nodes: &'a [MenuNode],
        expansion: &'a ExpansionState,
        render_row: impl Fn(&MenuRowContext<'a>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            nodes,
            expansion,
            active: None,
            hovered: None,
            on_select: None,
            on_toggle: None,
            on_hover: None,
            render_row: Box::new(render_row),
            row_style: None,
            spacing: 0.0,
            indent_width: 0.0,
        }
    }

    /// Id of the active section, used for highlighting.
    pub fn active(mut self, id: Option<&'a str>) -> Self {
        self.active = id;
        self
    }

    /// Id of the hovered row.
    pub fn hovered(mut self, id: Option<&'a str>) -> Self {
        self.hovered = id;
        self
    }

    /// Emit a message when a leaf item is pressed.
    pub fn on_select(
        mut self,
        on_select: impl Fn(String) -> Message + 'a,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Emit a message when a parent item is pressed.
    pub fn on_toggle(
        mut self,
        on_toggle: impl Fn(String) -> Message + 'a,
    ) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<String>) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&MenuRowContext<'a>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Set indentation width per nesting level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the menu.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for row in flatten_menu(self.nodes, self.expansion) {
            let id = row.node.id();
            let context = MenuRowContext {
                row,
                is_selected: self.active == Some(id),
                is_on_active_path: self.active.is_some_and(|active| {
                    is_active_or_ancestor_of_active(row.node, active)
                }),
                is_hovered: self.hovered == Some(id),
            };

            let content = (self.render_row)(&context);
            let content = self.wrap_row(content, row.node);

            let mut line = Row::new().spacing(0.0);
            let indent = row.depth as f32 * self.indent_width;
            if indent > 0.0 {
                line = line.push(Space::new().width(Length::Fixed(indent)));
            }
            line = line.push(content);

            let mut element: Element<'a, Message> = line.into();
            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                element = container(element).style(move |_| style).into();
            }

            column = column.push(element);
        }

        column.into()
    }

    fn wrap_row(
        &self,
        content: Element<'a, Message>,
        node: &MenuNode,
    ) -> Element<'a, Message> {
        let on_press = match MenuRowAction::for_node(node) {
            MenuRowAction::Select => self.on_select.as_deref(),
            MenuRowAction::Toggle => self.on_toggle.as_deref(),
            MenuRowAction::Inert => return content,
        };

        if on_press.is_none() && self.on_hover.is_none() {
            return content;
        }

        let id = node.id();
        let mut area = mouse_area(content);

        if let Some(on_press) = on_press {
            area = area.on_press(on_press(id.to_owned()));
        }

        if let Some(ref on_hover) = self.on_hover {
            area = area
                .on_enter(on_hover(Some(id.to_owned())))
                .on_exit(on_hover(None));
        }

        area.interaction(mouse::Interaction::Pointer).into()
    }
}

#[cfg(test)]
mod tests {
    use super::MenuRowAction;
    use crate::model::MenuNode;

    #[test]
    fn given_leaf_item_when_classified_then_press_selects() {
        let node = MenuNode::item("users", "Users");
        assert_eq!(MenuRowAction::for_node(&node), MenuRowAction::Select);
    }

    #[test]
    fn given_parent_item_when_classified_then_press_toggles() {
        let node =
            MenuNode::group("sales", "Sales", vec![MenuNode::item("o", "O")]);
        assert_eq!(MenuRowAction::for_node(&node), MenuRowAction::Toggle);
    }

    #[test]
    fn given_divider_when_classified_then_press_is_inert() {
        let node = MenuNode::divider("line");
        assert_eq!(MenuRowAction::for_node(&node), MenuRowAction::Inert);
    }
}
