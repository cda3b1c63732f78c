//! Sample chatbot, document, analytics, and marketing fixtures.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

/// A chatbot record as rendered on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chatbot {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub documents: u32,
    pub queries: u32,
    pub last_updated: &'static str,
    pub active: bool,
}

/// An uploaded document as rendered on the chatbot detail screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    pub pages: u32,
    pub uploaded_at: &'static str,
    pub processed: bool,
}

/// Canned analytics for the chatbot detail screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Analytics {
    pub queries_over_time: &'static [u32],
    pub top_queries: &'static [(&'static str, u32)],
    pub response_rate: f64,
    pub average_response_time: &'static str,
}

/// Pricing tier on the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price: &'static str,
    pub annual_price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

/// Question/answer pair for FAQ accordions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Marketing feature card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Help-screen guide card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
}

pub const CHATBOTS: &[Chatbot] = &[
    Chatbot {
        id: "cb_1",
        name: "Product Documentation Bot",
        description: "Answers questions about our product documentation",
        documents: 5,
        queries: 1250,
        last_updated: "2 days ago",
        active: true,
    },
    Chatbot {
        id: "cb_2",
        name: "HR Policies Assistant",
        description: "Helps employees find information about HR policies",
        documents: 12,
        queries: 843,
        last_updated: "5 days ago",
        active: true,
    },
    Chatbot {
        id: "cb_3",
        name: "Customer Support FAQ",
        description: "Answers common customer support questions",
        documents: 8,
        queries: 2150,
        last_updated: "1 day ago",
        active: true,
    },
    Chatbot {
        id: "cb_4",
        name: "Technical Documentation",
        description: "Technical documentation for developers",
        documents: 15,
        queries: 320,
        last_updated: "2 weeks ago",
        active: false,
    },
];

pub const DOCUMENTS: &[Document] = &[
    Document {
        id: "doc_1",
        name: "Product Manual.pdf",
        size: "2.4 MB",
        pages: 24,
        uploaded_at: "2023-05-15",
        processed: true,
    },
    Document {
        id: "doc_2",
        name: "API Documentation.pdf",
        size: "1.8 MB",
        pages: 18,
        uploaded_at: "2023-05-16",
        processed: true,
    },
    Document {
        id: "doc_3",
        name: "User Guide.pdf",
        size: "3.2 MB",
        pages: 32,
        uploaded_at: "2023-05-17",
        processed: true,
    },
    Document {
        id: "doc_4",
        name: "Installation Instructions.txt",
        size: "156 KB",
        pages: 5,
        uploaded_at: "2023-05-18",
        processed: true,
    },
    Document {
        id: "doc_5",
        name: "Troubleshooting Guide.md",
        size: "245 KB",
        pages: 8,
        uploaded_at: "2023-05-19",
        processed: false,
    },
];

pub const ANALYTICS: Analytics = Analytics {
    queries_over_time: &[120, 145, 132, 165, 178, 156, 198, 187, 210, 232, 245, 256, 278, 290, 310],
    top_queries: &[
        ("How do I install the product?", 87),
        ("What are the system requirements?", 65),
        ("How do I reset my password?", 52),
        ("Is there a mobile app?", 43),
        ("How do I export my data?", 38),
    ],
    response_rate: 98.5,
    average_response_time: "1.2s",
};

/// Embed snippet shown on the chatbot settings tab.
pub const EMBED_CODE: &str = r##"<script src="https://cdn.ragsaas.com/widget.js"></script>
<script>
  window.ragWidget.init({
    chatbotId: "cb_1",
    position: "bottom-right",
    theme: "light",
    primaryColor: "#9333ea"
  });
</script>"##;

/// Canned assistant replies for the preview conversation, cycled in order.
pub const PREVIEW_RESPONSES: &[&str] = &[
    "Based on the documentation, you can find this information in the user manual section 3.2.",
    "The product supports Windows 10/11, macOS 10.15+, and Ubuntu 20.04+. You'll need at least 4GB RAM and 10GB of free disk space.",
    "To reset your password, go to the login page and click 'Forgot Password'. You'll receive an email with instructions.",
    "I couldn't find specific information about that in the documentation. Could you rephrase your question?",
];

pub const PREVIEW_GREETING: &str = "Hello! I'm your product documentation assistant. How can I help you today?";

/// Canned reply for the user message at `index` (0-based).
#[must_use]
pub fn preview_response(index: usize) -> &'static str {
    PREVIEW_RESPONSES[index % PREVIEW_RESPONSES.len()]
}

/// Find a chatbot fixture by id, falling back to the first one so deep links
/// with unknown ids still render a populated screen.
#[must_use]
pub fn chatbot_by_id(id: &str) -> &'static Chatbot {
    CHATBOTS.iter().find(|c| c.id == id).unwrap_or(&CHATBOTS[0])
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Upload & Parse Documents",
        description: "Drop in PDFs, TXTs, or Markdown and we extract, chunk, and index the content automatically.",
    },
    Feature {
        title: "Vector Search with Supabase",
        description: "Every chunk is embedded and stored for fast semantic retrieval over your own content.",
    },
    Feature {
        title: "Contextual Q&A",
        description: "Answers are grounded in your documents, with the relevant passages retrieved per question.",
    },
    Feature {
        title: "Multiple Chatbots",
        description: "Create a separate bot per product, team, or audience — each with its own document set.",
    },
    Feature {
        title: "Embed Anywhere",
        description: "A two-line script tag adds your chatbot to any website, styled to match your brand.",
    },
    Feature {
        title: "Enterprise Security",
        description: "Your documents stay in your project. Role-based access and encrypted storage throughout.",
    },
];

pub const HOW_IT_WORKS: &[Feature] = &[
    Feature {
        title: "Sign Up & Connect",
        description: "Create an account and connect your workspace in under a minute.",
    },
    Feature {
        title: "Upload Documents",
        description: "Add the manuals, policies, and guides your chatbot should know.",
    },
    Feature {
        title: "Install Widget",
        description: "Paste the embed snippet into your site — no build step required.",
    },
    Feature {
        title: "Start Chatting",
        description: "Visitors ask questions and get context-aware answers immediately.",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        monthly_price: "$0",
        annual_price: "$0",
        description: "Perfect for trying out the platform.",
        features: &["1 chatbot", "5 documents", "100 queries/month", "Community support"],
        highlighted: false,
    },
    PricingTier {
        name: "Basic",
        monthly_price: "$29",
        annual_price: "$24",
        description: "Great for small businesses and startups.",
        features: &["3 chatbots", "50 documents", "2,000 queries/month", "Email support"],
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        monthly_price: "$49",
        annual_price: "$39",
        description: "Perfect for growing businesses.",
        features: &["10 chatbots", "Unlimited documents", "10,000 queries/month", "Priority support", "Custom branding"],
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        monthly_price: "Custom",
        annual_price: "Custom",
        description: "For organizations with advanced needs.",
        features: &["Unlimited chatbots", "Unlimited documents", "Unlimited queries", "Dedicated support", "SSO & audit logs"],
        highlighted: false,
    },
];

pub const LANDING_FAQS: &[Faq] = &[
    Faq {
        question: "How does RAG SaaS work?",
        answer: "You upload documents, we index them, and your chatbot answers questions using only that content — retrieval-augmented generation without the infrastructure work.",
    },
    Faq {
        question: "What types of documents can I upload?",
        answer: "PDF, plain text, and Markdown files are supported today, with more formats on the way.",
    },
    Faq {
        question: "Do I need my own Gemini API key?",
        answer: "On the Free and Basic plans you bring your own key; Pro and Enterprise plans include managed capacity.",
    },
    Faq {
        question: "How much does it cost?",
        answer: "There's a free tier to get started, and paid plans begin at $24/month billed annually.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Documents are stored encrypted in your project and are never used to train shared models.",
    },
    Faq {
        question: "Can I customize the appearance of the chatbot?",
        answer: "Yes — the embed widget accepts theme, position, and brand-color options.",
    },
];

pub const HELP_FAQS: &[Faq] = &[
    Faq {
        question: "How do I create a new chatbot?",
        answer: "From the dashboard, click Create Chatbot, give it a name and description, and pick a model. You can add documents right after.",
    },
    Faq {
        question: "What file types are supported for document upload?",
        answer: "PDF, TXT, and Markdown. Scanned PDFs work best when they contain a text layer.",
    },
    Faq {
        question: "How do I embed my chatbot on my website?",
        answer: "Open the chatbot's Settings tab and copy the embed snippet into your site's HTML.",
    },
    Faq {
        question: "What is the maximum file size for uploads?",
        answer: "10 MB per document on Free and Basic, 50 MB on Pro and Enterprise.",
    },
    Faq {
        question: "How accurate are the chatbot responses?",
        answer: "Responses are grounded in your documents. Clear, well-structured source material produces the best answers.",
    },
    Faq {
        question: "Can I customize the appearance of my chatbot?",
        answer: "Yes — theme, widget position, and primary color are configurable per chatbot.",
    },
    Faq {
        question: "How do I get a Gemini API key?",
        answer: "Create one in Google AI Studio and paste it into Settings → API Keys.",
    },
    Faq {
        question: "How long does it take to process uploaded documents?",
        answer: "Most documents finish processing within a minute; large PDFs can take a few minutes.",
    },
];

pub const GUIDES: &[Guide] = &[
    Guide {
        title: "Getting Started with RAG SaaS",
        description: "Learn the basics of creating and managing your first chatbot",
        tag: "Beginner",
    },
    Guide {
        title: "Uploading and Managing Documents",
        description: "Best practices for document preparation and management",
        tag: "Intermediate",
    },
    Guide {
        title: "Embedding Your Chatbot",
        description: "Step-by-step guide to adding your chatbot to your website",
        tag: "Beginner",
    },
    Guide {
        title: "Advanced Chatbot Configuration",
        description: "Fine-tune your chatbot for better performance",
        tag: "Advanced",
    },
];

/// Short testimonial entries for the landing page.
pub const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "We replaced a 40-page FAQ with one chatbot. Support tickets dropped by a third in the first month.",
        "Maya Chen",
        "Head of Support, Fieldlight",
    ),
    (
        "Setup genuinely took an afternoon. Upload the docs, paste the snippet, done.",
        "Tomás Rivera",
        "Founder, Brickroad Labs",
    ),
    (
        "Our internal HR bot answers policy questions around the clock, in the exact wording of our handbook.",
        "Priya Natarajan",
        "People Ops, Northbeam",
    ),
];
