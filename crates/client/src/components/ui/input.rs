use dioxus::prelude::*;
use signup_shared::FormField;

#[derive(Props, Clone, PartialEq)]
pub struct FieldInputProps {
    pub field: FormField,
    pub value: String,
    /// Validation message; `None` when the field is valid.
    #[props(!optional)]
    pub error: Option<String>,
    pub oninput: EventHandler<String>,
}

/// Labelled form input with its inline validation message.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let field = props.field;
    let has_error = props.error.is_some();
    let border = if has_error {
        "border-red-500 focus:ring-red-500/50 focus:border-red-500"
    } else {
        "border-[#3f4147] focus:ring-indigo-500/50 focus:border-indigo-500"
    };
    let input_type = if field.is_secret() { "password" } else { "text" };
    let class = format!(
        "w-full rounded-lg bg-[#1e1f22] text-gray-100 px-4 py-3 text-sm border placeholder-gray-500 transition-all duration-200 focus:outline-none focus:ring-2 {border}"
    );

    rsx! {
        div {
            label {
                r#for: field.id(),
                class: "block text-sm font-medium text-gray-300 mb-2",
                "{field.label()}"
            }
            input {
                id: field.id(),
                name: field.id(),
                class,
                r#type: input_type,
                value: "{props.value}",
                "aria-invalid": "{has_error}",
                oninput: move |e: FormEvent| props.oninput.call(e.value()),
            }
            if let Some(message) = &props.error {
                p { class: "mt-1 text-sm text-red-400", "{message}" }
            }
        }
    }
}
