use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style::{
    action_button_style, panel_style, text_input_style,
};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::auth::event::AuthIntent;
use crate::widgets::auth::model::AuthViewModel;

const CARD_WIDTH: f32 = 340.0;
const CARD_PADDING: f32 = 28.0;
const CARD_SPACING: f32 = 14.0;
const LOGO_SIZE: f32 = 40.0;
const LOCK_ICON_SIZE: f32 = 14.0;
const INPUT_PADDING: f32 = 8.0;
const LABEL_SIZE: f32 = 11.0;
const SUBMIT_HEIGHT: f32 = 34.0;

/// Props for the login form view.
pub(crate) struct LoginFormProps<'a> {
    pub(crate) vm: AuthViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the centered sign-in card.
pub(crate) fn view(
    props: LoginFormProps<'_>,
) -> Element<'_, AuthIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let is_loading = props.vm.is_loading;

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_SMALL))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE));
    let title = text("Sign in to Backoffice")
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);

    let label_color = palette.dim_foreground;
    let label = move |value: &'static str| {
        text(value)
            .size(LABEL_SIZE)
            .style(move |_| text::Style {
                color: Some(label_color),
            })
    };

    let mut email = text_input("name@company.com", props.vm.email)
        .font(props.fonts.ui.font_type)
        .padding(INPUT_PADDING)
        .size(props.fonts.ui.size)
        .style(text_input_style(props.theme));
    let mut password = text_input("Password", props.vm.password)
        .secure(true)
        .font(props.fonts.ui.font_type)
        .padding(INPUT_PADDING)
        .size(props.fonts.ui.size)
        .style(text_input_style(props.theme));
    if !is_loading {
        email = email
            .on_input(AuthIntent::EmailChanged)
            .on_submit(AuthIntent::Submit);
        password = password
            .on_input(AuthIntent::PasswordChanged)
            .on_submit(AuthIntent::Submit);
    }

    let error: Element<'_, AuthIntent, Theme, iced::Renderer> =
        match props.vm.error {
            Some(message) => {
                let color = palette.red;
                text(message)
                    .size(LABEL_SIZE)
                    .style(move |_| text::Style { color: Some(color) })
                    .into()
            },
            None => Space::new().height(Length::Fixed(LABEL_SIZE)).into(),
        };

    let lock_color = palette.foreground;
    let lock = svg::Svg::new(svg::Handle::from_memory(icons::LOCK))
        .width(Length::Fixed(LOCK_ICON_SIZE))
        .height(Length::Fixed(LOCK_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(lock_color),
        });
    let submit_label = if is_loading { "Signing in..." } else { "Sign in" };
    let submit_palette = palette.clone();
    let submit = button(
        container(
            row![lock, text(submit_label).size(props.fonts.ui.size)]
                .spacing(8.0)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center),
    )
    .on_press_maybe((!is_loading).then_some(AuthIntent::Submit))
    .width(Length::Fill)
    .height(Length::Fixed(SUBMIT_HEIGHT))
    .style(move |_, status| {
        action_button_style(&submit_palette, status, !is_loading)
    });

    let form = column![
        logo,
        title,
        column![label("EMAIL"), email].spacing(4.0),
        column![label("PASSWORD"), password].spacing(4.0),
        error,
        submit,
    ]
    .spacing(CARD_SPACING)
    .align_x(alignment::Horizontal::Center);

    let card = container(form)
        .padding(CARD_PADDING)
        .width(Length::Fixed(CARD_WIDTH))
        .style(panel_style(props.theme));

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
