use crate::components::{GenerateButton, LimitSlider, QuestionField, ThemeToggle, VisionDisplay};
use leptos::prelude::*;
use server_fn::codec::Json;
use server_fn::ServerFnError;
use vision_app::domain::{
    Constraints, FormAnswers, GenerationState, Vision, VisionRequest, LINE_LIMIT_RANGE,
    QUESTIONS, QUESTION_COUNT, WORD_LIMIT_RANGE,
};
use vision_errors::ValidationError;

#[server(
    name = GenerateVisionFn,
    prefix = "/api",
    endpoint = "generate_vision",
    input = Json
)]
pub async fn generate_vision(request: VisionRequest) -> Result<Vision, ServerFnError> {
    use vision_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.generate_vision
        .execute(request)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

/// Form state: field bindings, validation errors and the result slot.
#[derive(Clone, Copy)]
pub struct VisionFormVm {
    pub answers: [RwSignal<String>; QUESTION_COUNT],
    pub errors: RwSignal<Option<ValidationError>>,
    pub submitted: RwSignal<bool>,
    pub word_limit: RwSignal<u32>,
    pub line_limit: RwSignal<u32>,
    pub generation: RwSignal<GenerationState>,
}

impl VisionFormVm {
    pub fn new() -> Self {
        let defaults = Constraints::default();
        Self {
            answers: std::array::from_fn(|_| RwSignal::new(String::new())),
            errors: RwSignal::new(None),
            submitted: RwSignal::new(false),
            word_limit: RwSignal::new(defaults.word_limit),
            line_limit: RwSignal::new(defaults.line_limit),
            generation: RwSignal::new(GenerationState::new()),
        }
    }

    pub fn snapshot(&self) -> FormAnswers {
        FormAnswers::new(std::array::from_fn(|idx| self.answers[idx].get_untracked()))
    }

    pub fn constraints(&self) -> Constraints {
        Constraints::new(self.word_limit.get_untracked(), self.line_limit.get_untracked())
    }

    pub fn has_error(&self, question: usize) -> bool {
        self.errors
            .with(|errors| errors.as_ref().is_some_and(|e| e.is_missing(question)))
    }

    /// After the first submit, every edit re-runs validation.
    pub fn revalidate(&self) {
        if self.submitted.get_untracked() {
            self.errors.set(self.snapshot().validate().err());
        }
    }

    pub fn submit(&self) {
        self.submitted.set(true);

        let answers = self.snapshot();
        if let Err(e) = answers.validate() {
            self.errors.set(Some(e));
            return;
        }
        self.errors.set(None);

        if self.generation.with_untracked(GenerationState::is_pending) {
            return;
        }
        let Some(token) = self.generation.try_update(|state| state.submit()) else {
            return;
        };

        let request = VisionRequest::new(answers, self.constraints());
        let generation = self.generation;
        leptos::task::spawn_local(async move {
            let result = generate_vision(request).await.map(|vision| vision.text);
            if let Err(e) = &result {
                tracing::warn!("Vision generation failed: {}", e);
            }
            generation.update(|state| {
                state.resolve(token, result);
            });
        });
    }
}

impl Default for VisionFormVm {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let vm = VisionFormVm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let is_loading = Signal::derive(move || vm.generation.with(GenerationState::is_pending));
    let label = Signal::derive(move || vm.generation.with(GenerationState::button_label));

    view! {
        <ThemeToggle/>

        <form class="vision-form" on:submit=on_submit novalidate>
            <h1 class="hero__title">"Vision Statement Generator"</h1>
            <h2 class="hero__subtitle">
                "Shape your organization's future. Provide your insights below to craft a vision statement that encapsulates your core values, mission, and aspirations."
            </h2>

            {QUESTIONS
                .iter()
                .enumerate()
                .map(|(idx, question)| {
                    let number = idx + 1;
                    view! {
                        <QuestionField
                            number=number
                            question=*question
                            value=vm.answers[idx]
                            has_error=Signal::derive(move || vm.has_error(number))
                            on_edit=move |_| vm.revalidate()
                        />
                    }
                })
                .collect::<Vec<_>>()}

            <LimitSlider label="Word Limit" range=WORD_LIMIT_RANGE value=vm.word_limit/>
            <LimitSlider label="Line Limit" range=LINE_LIMIT_RANGE value=vm.line_limit/>

            <GenerateButton label=label is_loading=is_loading/>
        </form>

        <VisionDisplay generation=vm.generation/>
    }
}
