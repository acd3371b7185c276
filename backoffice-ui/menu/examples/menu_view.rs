use backoffice_ui_menu::{ExpansionState, MenuNode, MenuRowContext, MenuView};
use iced::widget::{Space, container, row, text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
enum Message {
    Select(String),
    Toggle(String),
    Hover(Option<String>),
}

struct AppState {
    nodes: Vec<MenuNode>,
    expansion: ExpansionState,
    active: String,
    hovered: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let nodes = vec![
            MenuNode::item("dashboard", "Dashboard"),
            MenuNode::group(
                "sales",
                "Sales",
                vec![
                    MenuNode::item("orders", "Orders"),
                    MenuNode::group(
                        "billing",
                        "Billing",
                        vec![MenuNode::item("invoices", "Invoices")],
                    ),
                ],
            ),
            MenuNode::divider("line"),
            MenuNode::item("about", "About"),
        ];
        let active = String::from("invoices");
        let mut expansion = ExpansionState::new();
        expansion.follow_active(&nodes, &active);

        Self {
            nodes,
            expansion,
            active,
            hovered: None,
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Select(id) => {
            state.expansion.follow_active(&state.nodes, &id);
            state.active = id;
        },
        Message::Toggle(id) => state.expansion.toggle(&id),
        Message::Hover(id) => state.hovered = id,
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    MenuView::new(&state.nodes, &state.expansion, render_row)
        .active(Some(state.active.as_str()))
        .hovered(state.hovered.as_deref())
        .on_select(Message::Select)
        .on_toggle(Message::Toggle)
        .on_hover(Message::Hover)
        .row_style(row_style)
        .indent_width(14.0)
        .view()
}

fn render_row<'a>(context: &MenuRowContext<'a>) -> Element<'a, Message> {
    let node = context.row.node;
    if node.is_divider() {
        return container(Space::new())
            .height(Length::Fixed(1.0))
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Color::from_rgb(0.3, 0.3, 0.3).into()),
                ..Default::default()
            })
            .into();
    }

    let marker = match (node.has_children(), context.row.expanded) {
        (true, true) => "v",
        (true, false) => ">",
        (false, _) => " ",
    };

    container(row![text(marker), text(node.label())].spacing(6))
        .padding([4, 8])
        .width(Length::Fill)
        .into()
}

fn row_style(context: &MenuRowContext<'_>) -> container::Style {
    let background = if context.is_selected {
        Some(Color::from_rgb(0.12, 0.26, 0.46).into())
    } else if context.is_hovered {
        Some(Color::from_rgb(0.18, 0.18, 0.18).into())
    } else {
        None
    };
    let text_color = if context.is_on_active_path {
        Color::WHITE
    } else {
        Color::from_rgb(0.7, 0.7, 0.7)
    };

    container::Style {
        background,
        text_color: Some(text_color),
        ..Default::default()
    }
}

fn main() -> iced::Result {
    iced::run(update, view)
}
