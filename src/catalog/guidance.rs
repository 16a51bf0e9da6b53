//! Informational text shown alongside the questions.

use super::PromptTemplate;

/// Prompt used to turn a plan-like purpose statement into a strategy.
pub const REFINE_STRATEGY_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"The user provided the following as their organization's purpose and strategic direction:
"{answer}"

This input might be more of a list of plans or activities rather than a cohesive strategy.
A strategy defines how an organization will achieve a specific competitive outcome and be better than its competitors. It's an integrated set of choices, not just a list of tasks. A plan outlines steps, while a strategy explains *why* those actions lead to a competitive advantage.

Please help the user refine their input into a more strategic statement. Based on their provided text, suggest a concise strategic direction for their organization. Focus on identifying a potential competitive advantage, a core value proposition, or how the organization intends to 'win' or create unique value in its chosen domain. The output should be suitable for an organization's Quality Manual."#,
);

pub const STRATEGY_VS_PLAN_EXPLANATION: &str = r#"**Understanding the Difference: Plan vs. Strategy**

It's important to distinguish between a "plan" and a "strategy" when defining your organization's direction.

*   **Purpose and Goal:**
    *   A **plan** is typically a list of activities or tasks to be performed. It outlines the steps or initiatives a company intends to engage in. Plans are often associated with aspirational goals or a list of desired improvements.
    *   A **strategy** is an integrated set of choices and actions aimed at achieving a specific competitive outcome or occupying a valuable position within a chosen competitive landscape. It defines how an organisation will be better than its competitors and how it will "win" in the market. Strategy is useless without a clear objective or outcome.

*   **Focus and Control:**
    *   **Planning** tends to be internally focused, emphasizing improvements and projects within the organisation's control. It deals with resources and activities that the organisation directly manages, such as building a new plant or hiring staff.
    *   **Strategy** balances internal improvements with a clear understanding of the external market and competitive landscape. It focuses on desired *outcomes* influenced by external factors like customer choices and competitor actions, which are not within the organisation's direct control.

*   **Characteristics and Approach:**
    *   **Planning** does not necessarily require internal coherence between its listed activities. Annual reports often function as lists of planned activities completed, rather than demonstrating how they contribute to a competitive advantage.
    *   **Strategy** is a coherent, integrated set of choices and activities that need to be well-aligned. It involves making choices about what to do *and what not to do*. Its success cannot be proven in advance; it is refined continuously as the external environment changes, and it is tailored to the specific organisation, its resources, and its context.

*   **Risk and Outcomes:**
    *   Listing activities without a strategy can lead to activities that "won't add up to much" in a competitive environment.
    *   A **strategy** gives the best chance of winning. It defines a clear competitive position and a unique value proposition that differentiates the organisation from rivals, creating value by increasing the customer's willingness to pay or decreasing the cost to the organisation.

In essence, while a **plan** is a list of activities, a **strategy** is a set of integrated choices about *how to compete and win* in a specific external environment. A plan details *what* you will do; a strategy explains *why* those actions will position you to succeed relative to others."#;

pub const DASHBOARD_GETTING_STARTED: &[&str] = &[
    "Start by filling out your Company Information.",
    "Select a QMS section from the sidebar to begin.",
    "Answer the questions provided.",
    "Use \"AI Draft Assist\" to get help writing content.",
    "Use \"AI Search Info\" for research and examples.",
    "View compiled documents under \"View Generated Documents\".",
    "Learn more about ISO 9001:2015 in the \"About ISO 9001:2015\" section.",
];

pub const DASHBOARD_TIPS: &[&str] = &[
    "Be thorough and accurate in your answers.",
    "Review AI-generated content carefully.",
    "Adapt suggestions to your specific organizational context.",
    "Remember, this tool assists, but you are the expert on your organization.",
];

pub const ISO_OVERVIEW: &str = "ISO 9001 is the world's most recognized Quality Management System (QMS) standard. \
It helps organizations meet the needs of their customers and other stakeholders by building a framework \
that ensures consistent quality in the provision of goods and services. The standard rests on quality \
management principles including a strong customer focus, the involvement of top management, the process \
approach, and continual improvement. ISO 9001:2015 is the current version of the standard.";

/// The seven quality management principles as (name, description).
pub const ISO_PRINCIPLES: &[(&str, &str)] = &[
    ("Customer focus", "Understanding current and future customer needs, meeting customer requirements, and striving to exceed customer expectations."),
    ("Leadership", "Establishing unity of purpose and direction and creating conditions in which people are engaged in achieving the quality objectives of the organization."),
    ("Engagement of people", "Competent, empowered, and engaged people at all levels throughout the organization are essential to enhance its capability to create and deliver value."),
    ("Process approach", "Consistent and predictable results are achieved more effectively and efficiently when activities are understood and managed as interrelated processes that function as a coherent system."),
    ("Improvement", "Successful organizations have an ongoing focus on improvement."),
    ("Evidence-based decision making", "Decisions based on the analysis and evaluation of data and information are more likely to produce desired results."),
    ("Relationship management", "For sustained success, an organization manages its relationships with interested parties, such as suppliers."),
];

pub const ISO_BENEFITS: &[&str] = &[
    "Increased efficiency and productivity",
    "Improved customer satisfaction and loyalty",
    "Enhanced market reputation and credibility",
    "Better decision-making processes",
    "Greater employee engagement and morale",
    "Reduced waste and operational costs",
    "Facilitation of continual improvement",
    "Better integration and alignment of internal processes",
    "Access to new markets (as ISO 9001 is often a requirement)",
];
