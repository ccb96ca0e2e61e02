use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::config::{DEFAULT_SUBMIT_LABEL, SENT_LABEL_MS};
use crate::contact::form::{ButtonPhase, ContactForm, Delivery, Notice, SubmitRejected};
use crate::contact::mailer::{MailError, MailerHandle};
use crate::contact::validation::FieldName;
use crate::modal::catalog::ServiceId;

#[derive(Properties, PartialEq)]
pub struct ContactFormWidgetProps {
    pub mailer: MailerHandle,
    pub on_notice: Callback<Notice>,
    #[prop_or_else(|| DEFAULT_SUBMIT_LABEL.to_string())]
    pub submit_label: String,
}

pub enum ContactFormMsg {
    Input(FieldName, String),
    Blur(FieldName),
    Submit,
    Delivered { generation: u64, result: Result<(), MailError> },
    RestoreLabel(u64),
}

pub struct ContactFormWidget {
    form: ContactForm,
    restore_timer: Option<Timeout>,
}

fn event_value<E: TargetCast>(e: &E) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

impl Component for ContactFormWidget {
    type Message = ContactFormMsg;
    type Properties = ContactFormWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(ctx.props().submit_label.clone()),
            restore_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(name, value) => {
                self.form.on_input(name, value);
                true
            }
            ContactFormMsg::Blur(name) => {
                self.form.on_blur(name);
                true
            }
            ContactFormMsg::Submit => {
                match self.form.submit(&*ctx.props().mailer.0) {
                    Ok(Delivery { generation, outcome }) => {
                        info!("Sending contact form");
                        ctx.link().send_future(async move {
                            ContactFormMsg::Delivered {
                                generation,
                                result: outcome.await,
                            }
                        });
                    }
                    Err(SubmitRejected::Invalid(notice)) => ctx.props().on_notice.emit(notice),
                    Err(SubmitRejected::InFlight) => return false,
                }
                true
            }
            ContactFormMsg::Delivered { generation, result } => {
                if let Err(e) = &result {
                    error!("Contact form delivery failed: {}", e);
                }
                let Some(notice) = self.form.finish(generation, result) else {
                    return false;
                };
                ctx.props().on_notice.emit(notice);
                if self.form.phase() == ButtonPhase::Sent {
                    let link = ctx.link().clone();
                    self.restore_timer = Some(Timeout::new(SENT_LABEL_MS, move || {
                        link.send_message(ContactFormMsg::RestoreLabel(generation));
                    }));
                }
                true
            }
            ContactFormMsg::RestoreLabel(generation) => {
                self.restore_timer = None;
                self.form.restore(generation)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let oninput = |name: FieldName| link.callback(move |e: InputEvent| ContactFormMsg::Input(name, event_value(&e)));
        let onblur = |name: FieldName| link.callback(move |_: FocusEvent| ContactFormMsg::Blur(name));

        let disabled = self.form.button_disabled();
        let button_style = if disabled { "opacity: 0.7;" } else { "opacity: 1;" };

        // A select keeps its own choice once the visitor touches it, so a
        // reset remounts the form instead of patching `selected`.
        html! {
            <form key={self.form.reset_count().to_string()} id="contact-form" class="contact-form" {onsubmit}>
                { self.field_group(FieldName::Name, "Nombre", html! {
                    <input type="text" id={FieldName::Name.element_id()} name={FieldName::Name.as_str()}
                        placeholder="Tu nombre"
                        value={self.form.value(FieldName::Name).to_string()}
                        oninput={oninput(FieldName::Name)}
                        onblur={onblur(FieldName::Name)} />
                }) }
                { self.field_group(FieldName::Email, "Email", html! {
                    <input type="text" inputmode="email" id={FieldName::Email.element_id()} name={FieldName::Email.as_str()}
                        placeholder="tu@correo.com"
                        value={self.form.value(FieldName::Email).to_string()}
                        oninput={oninput(FieldName::Email)}
                        onblur={onblur(FieldName::Email)} />
                }) }
                { self.field_group(FieldName::Company, "Empresa", html! {
                    <input type="text" id={FieldName::Company.element_id()} name={FieldName::Company.as_str()}
                        placeholder="Opcional"
                        value={self.form.value(FieldName::Company).to_string()}
                        oninput={oninput(FieldName::Company)}
                        onblur={onblur(FieldName::Company)} />
                }) }
                { self.field_group(FieldName::Service, "Servicio", html! {
                    <select id={FieldName::Service.element_id()} name={FieldName::Service.as_str()}
                        onchange={link.callback(|e: Event| ContactFormMsg::Input(FieldName::Service, event_value(&e)))}
                        onblur={onblur(FieldName::Service)}>
                        <option value="" selected={self.form.value(FieldName::Service).is_empty()}>{"Selecciona un servicio"}</option>
                        { for ServiceId::ALL.iter().map(|id| html! {
                            <option value={id.as_str()} selected={self.form.value(FieldName::Service) == id.as_str()}>
                                {id.entry().title}
                            </option>
                        }) }
                    </select>
                }) }
                { self.field_group(FieldName::Message, "Mensaje", html! {
                    <textarea id={FieldName::Message.element_id()} name={FieldName::Message.as_str()} rows="5"
                        placeholder="Cuéntanos sobre tu proyecto"
                        value={self.form.value(FieldName::Message).to_string()}
                        oninput={oninput(FieldName::Message)}
                        onblur={onblur(FieldName::Message)} />
                }) }
                <button type="submit" class="submit-btn" {disabled} style={button_style}>
                    <span id="btn-text">{self.form.button_label().to_string()}</span>
                </button>
            </form>
        }
    }
}

impl ContactFormWidget {
    fn field_group(&self, name: FieldName, label: &'static str, control: Html) -> Html {
        let status = self.form.status(name);
        html! {
            <div class={classes!("form-group", status.map(|s| s.css_class()))}>
                <label for={name.element_id()}>{label}</label>
                {control}
                {
                    if let Some(status) = status {
                        html! {
                            <span class={classes!("form-message", status.css_class())}>
                                {status.message().to_string()}
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
