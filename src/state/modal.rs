//! Informational demo modal: content and open/close lifecycle.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

pub const OVERLAY_CLASS: &str = "demo-modal-overlay";
pub const CLOSE_BUTTON_CLASS: &str = "close-demo-modal";
pub const STYLE_ELEMENT_ID: &str = "demo-modal-styles";
pub const TITLE: &str = "Portfolio Demo";
pub const FADE_OUT_ANIMATION: &str = "fadeOut 0.3s ease";

/// One feature card inside the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoFeature {
    /// Font Awesome icon class.
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [DemoFeature; 4] = [
    DemoFeature {
        icon: "fas fa-mobile-alt",
        title: "Responsive Design",
        body: "Fully responsive layout that works on all devices",
    },
    DemoFeature {
        icon: "fas fa-rocket",
        title: "Smooth Animations",
        body: "Engaging scroll animations and transitions",
    },
    DemoFeature {
        icon: "fas fa-code",
        title: "Clean Code",
        body: "Well-structured HTML, CSS, and JavaScript",
    },
    DemoFeature {
        icon: "fas fa-search",
        title: "SEO Optimized",
        body: "Search engine friendly structure and meta tags",
    },
];

/// Action button that scrolls to a section and closes the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoAction {
    pub label: &'static str,
    pub class: &'static str,
    pub target: &'static str,
}

pub const ACTIONS: [DemoAction; 2] = [
    DemoAction { label: "View Projects", class: "btn btn-primary", target: "#projects" },
    DemoAction { label: "Get In Touch", class: "btn btn-outline", target: "#contact" },
];

/// Lifecycle of the single modal instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    /// Fade-out running; removal follows.
    Closing,
}

/// Identifies one opening of the modal, so a fade timer scheduled for an
/// earlier overlay cannot close a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModalGeneration(u64);

#[derive(Clone, Debug, Default)]
pub struct ModalState {
    phase: ModalPhase,
    generation: u64,
    styles_injected: bool,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Open the modal. Returns `None` when one is already showing.
    pub fn open(&mut self) -> Option<ModalGeneration> {
        if self.phase != ModalPhase::Closed {
            return None;
        }
        self.generation += 1;
        self.phase = ModalPhase::Open;
        Some(ModalGeneration(self.generation))
    }

    /// Generation of the most recent opening.
    pub fn generation(&self) -> ModalGeneration {
        ModalGeneration(self.generation)
    }

    /// Returns `true` the first time; the stylesheet is injected once per
    /// page.
    pub fn claim_style_injection(&mut self) -> bool {
        !std::mem::replace(&mut self.styles_injected, true)
    }

    /// Begin closing. Returns `true` when the fade should start.
    pub fn request_close(&mut self) -> bool {
        if self.phase != ModalPhase::Open {
            return false;
        }
        self.phase = ModalPhase::Closing;
        true
    }

    /// The overlay of `generation` was removed, either after the fade or
    /// immediately by an action button. A stale generation is ignored and
    /// returns `false`.
    pub fn removed(&mut self, generation: ModalGeneration) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        self.phase = ModalPhase::Closed;
        true
    }
}

/// Stylesheet injected alongside the first modal.
pub const MODAL_STYLES: &str = r"
.demo-modal-overlay {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: rgba(0, 0, 0, 0.8);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 2000;
    animation: fadeIn 0.3s ease;
}

.demo-modal {
    background: white;
    border-radius: 12px;
    max-width: 600px;
    width: 90%;
    max-height: 80vh;
    overflow: hidden;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    animation: slideInUp 0.3s ease;
}

.demo-modal-header {
    background: #f8fafc;
    padding: 1.5rem;
    border-bottom: 1px solid #e5e7eb;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.demo-modal-header h3 {
    margin: 0;
    color: #1f2937;
}

.close-demo-modal {
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
    color: #6b7280;
    padding: 0.25rem;
    border-radius: 4px;
    transition: all 0.15s ease;
}

.close-demo-modal:hover {
    background: #f3f4f6;
    color: #374151;
}

.demo-modal-content {
    padding: 2rem;
}

.demo-features {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 1.5rem;
    margin-bottom: 2rem;
}

.demo-feature {
    text-align: center;
    padding: 1rem;
    border-radius: 8px;
    border: 1px solid #e5e7eb;
}

.demo-feature i {
    font-size: 2rem;
    color: #3b82f6;
    margin-bottom: 1rem;
}

.demo-feature h4 {
    margin: 0 0 0.5rem 0;
    color: #1f2937;
}

.demo-feature p {
    margin: 0;
    color: #6b7280;
    font-size: 0.875rem;
}

.demo-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
}

@keyframes slideInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
";
