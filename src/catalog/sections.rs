//! Section, question and document data.

use super::{DocumentDefinition, DocumentKind, InputKind, PromptTemplate, Question, Section};

pub const QUALITY_MANUAL: DocumentDefinition = DocumentDefinition {
    id: "L1-MAN-001",
    title: "Quality Manual",
    revision: "Rev 0",
    kind: DocumentKind::QualityManual,
};

pub const CODE_OF_CONDUCT: DocumentDefinition = DocumentDefinition {
    id: "L1-POL-001",
    title: "Code of Conduct and Business Ethics",
    revision: "Rev 0",
    kind: DocumentKind::CodeOfConduct,
};

pub static SECTIONS: &[Section] = &[
    Section {
        id: "s1",
        title: "Section 1: Laying the Foundation",
        description: "Define the purpose, scope, and context of your QMS. This information is crucial for your Quality Manual and strategic alignment.",
        questions: &[
            Question {
                id: "1.1.a",
                text: "What is your organization's primary purpose and strategic direction?",
                input: InputKind::TextArea,
                help_text: Some("Consider your mission, vision, and core business activities. This will form part of your Quality Manual. Ensure this describes a strategy, not just a list of plans."),
                placeholder: Some("e.g., To be the leading provider of innovative software solutions for small businesses, focusing on user experience and customer satisfaction, achieved by differentiating through superior customer support and rapid feature deployment."),
                draft_prompt: Some(PromptTemplate::new("Based on the organizational purpose and strategic direction: \"{answer}\", draft an introductory paragraph for the 'Organizational Context' section of a Quality Manual. Focus on clarity and conciseness.")),
                search_query: Some(PromptTemplate::new("Examples of strategic direction statements for organizations with purpose: {answer}")),
                checks_strategy: true,
            },
            Question {
                id: "1.1.b",
                text: "Who are your key stakeholders (internal and external) and what are their relevant needs and expectations?",
                input: InputKind::TextArea,
                help_text: Some("E.g., customers, employees, suppliers, regulators, shareholders. This also goes into the Quality Manual."),
                placeholder: Some("e.g., Customers: reliable products, excellent support. Employees: fair wages, growth opportunities. Regulators: compliance with X, Y, Z."),
                draft_prompt: Some(PromptTemplate::new("Given the key stakeholders and their expectations: \"{answer}\", draft a paragraph outlining how these influence the QMS for the 'Organizational Context' section of a Quality Manual.")),
                search_query: None,
                checks_strategy: false,
            },
            Question {
                id: "1.1.c",
                text: "What are the key internal and external issues that can affect your QMS and its ability to achieve intended results?",
                input: InputKind::TextArea,
                help_text: Some("Consider SWOT analysis (Strengths, Weaknesses, Opportunities, Threats)."),
                placeholder: Some("e.g., Internal: aging infrastructure, skilled workforce. External: market competition, technological changes."),
                draft_prompt: Some(PromptTemplate::new("Based on these internal/external issues: \"{answer}\", summarize their impact on the QMS.")),
                search_query: None,
                checks_strategy: false,
            },
            Question {
                id: "1.1.d",
                text: "What are the key legal, regulatory, and contractual requirements applicable to your products/services and QMS?",
                input: InputKind::TextArea,
                help_text: Some("This is critical for compliance. Be specific."),
                placeholder: Some("e.g., ISO 9001:2015, GDPR, specific industry regulations like FDA for medical devices."),
                draft_prompt: Some(PromptTemplate::new("For an organization with these legal/regulatory requirements: \"{answer}\", draft a statement of commitment to compliance for a Quality Manual.")),
                search_query: Some(PromptTemplate::new("Relevant legal and regulatory frameworks for an organization in [describe industry/region] with obligations: {answer}")),
                checks_strategy: false,
            },
            Question {
                id: "1.2.a",
                text: "Define the scope of your QMS. What products, services, processes, and sites are covered?",
                input: InputKind::TextArea,
                help_text: Some("A clear scope is essential. E.g., \"The design, development, and support of X software, at our main office.\""),
                placeholder: Some("e.g., The design, development, manufacturing, and servicing of custom electronic components at the Springfield facility."),
                draft_prompt: Some(PromptTemplate::new("Based on this QMS scope: \"{answer}\", draft a formal scope statement for a Quality Manual. Ensure it clearly defines boundaries and applicability.")),
                search_query: None,
                checks_strategy: false,
            },
            Question {
                id: "1.2.b",
                text: "What specific standards or frameworks (e.g., ISO 9001, AS9100) will your QMS adhere to?",
                input: InputKind::TextArea,
                help_text: None,
                placeholder: Some("e.g., ISO 9001:2015, CMMI Level 3"),
                draft_prompt: Some(PromptTemplate::new("Draft a sentence for a Quality Manual stating adherence to these standards: \"{answer}\".")),
                search_query: None,
                checks_strategy: false,
            },
            Question {
                id: "1.3.a",
                text: "Identify the key processes within your QMS and their sequence and interaction.",
                input: InputKind::TextArea,
                help_text: Some("Think high-level: e.g., Sales -> Design -> Production -> Delivery. A process map can be helpful."),
                placeholder: Some("e.g., Customer Inquiry -> Quoting -> Order Processing -> Design & Development -> Production -> Quality Control -> Shipping -> Post-Sales Support."),
                draft_prompt: Some(PromptTemplate::new("Based on these key QMS processes and interactions: \"{answer}\", draft a section for the Quality Manual describing the process approach. Consider mentioning inputs, outputs, and controls for key processes.")),
                search_query: None,
                checks_strategy: false,
            },
        ],
        documents: &[QUALITY_MANUAL],
    },
    Section {
        id: "s2",
        title: "Section 2: Developing Core Corporate Policies (Level 1)",
        description: "Establish fundamental policies that guide your organization. These will be referenced in your QMS.",
        questions: &[
            Question {
                id: "2.1.a",
                text: "What are your organization's core ethical values and principles?",
                input: InputKind::TextArea,
                help_text: Some("E.g., Integrity, Honesty, Respect, Accountability. This forms the basis of your Code of Conduct."),
                placeholder: Some("e.g., Integrity, Customer Focus, Innovation, Teamwork, Responsibility."),
                draft_prompt: Some(PromptTemplate::new("Based on these core ethical values: \"{answer}\", draft the 'Core Principles' section of a Code of Conduct (L1-POL-001).")),
                search_query: Some(PromptTemplate::new("Examples of core ethical values statements for corporate codes of conduct. Values: {answer}")),
                checks_strategy: false,
            },
            Question {
                id: "2.1.b",
                text: "What specific standards of business conduct do you want to establish (e.g., conflicts of interest, gifts & entertainment, confidentiality, fair dealing)?",
                input: InputKind::TextArea,
                help_text: None,
                placeholder: Some("e.g., Strict policy on conflicts of interest, no acceptance of gifts above nominal value, protection of confidential information, fair competition."),
                draft_prompt: Some(PromptTemplate::new("For a Code of Conduct, draft clauses covering these business conduct standards: \"{answer}\". Provide a brief explanation for each standard.")),
                search_query: None,
                checks_strategy: false,
            },
        ],
        documents: &[CODE_OF_CONDUCT],
    },
];
