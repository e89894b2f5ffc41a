use ride_tracker_lib::chat::{ChatMessage, ChatSender};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub log: Vec<ChatMessage>,
    pub input: String,
    pub busy: bool,
    pub on_input: Callback<String>,
    pub on_send: Callback<()>,
}

pub struct ChatPanel {
    transcript: NodeRef,
}

impl Component for ChatPanel {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            transcript: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let on_input = {
            let cb = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                cb.emit(input.value());
            })
        };

        let on_click = {
            let cb = props.on_send.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };

        // Enter inside the input sends, same as the button.
        let on_keypress = {
            let cb = props.on_send.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    cb.emit(());
                }
            })
        };

        html! {
            <div class="chat component-container">
                <div class="chatbox" ref={self.transcript.clone()}>
                    { for props.log.iter().map(|message| {
                        let class = match message.sender {
                            ChatSender::You => "chat-message user-message",
                            ChatSender::Bot => "chat-message bot-message",
                        };
                        html! {
                            <div class={class}>
                                <strong>{ format!("{}:", message.sender.label()) }</strong>
                                { format!(" {}", message.text) }
                            </div>
                        }
                    }) }
                </div>
                <input
                    type="text"
                    placeholder="Ask about your ride..."
                    value={props.input.clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                />
                <button
                    class={classes!(props.busy.then_some("loading"))}
                    disabled={props.busy}
                    onclick={on_click}
                >
                    { "Send" }
                </button>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest message in view.
        if let Some(transcript) = self.transcript.cast::<web_sys::Element>() {
            transcript.set_scroll_top(transcript.scroll_height());
        }
    }
}
