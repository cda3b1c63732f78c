//! Static rendering fixtures.
//!
//! Everything the dashboard and marketing screens display (chatbots,
//! documents, analytics, pricing, FAQs) is constant sample data. No
//! retrieval pipeline exists behind these values.

pub mod mock;
