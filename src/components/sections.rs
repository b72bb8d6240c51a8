use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardSectionProps {
    #[prop_or_default]
    pub id: Option<&'static str>,
    #[prop_or_default]
    pub title: Option<&'static str>,
    pub children: Children,
}

/// The linen card every copy section of the invitation sits in.
#[function_component(CardSection)]
pub fn card_section(props: &CardSectionProps) -> Html {
    html! {
        <section id={props.id} class="page-section">
            <div class="linen-card">
                if let Some(title) = props.title {
                    <h2 class="linen-title card-section-title">{title}</h2>
                    <div class="linen-divider" />
                }
                <div class="linen-body pre-line card-section-body">
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
