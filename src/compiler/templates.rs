//! Per-document templates.

use super::blocks::{
    or_placeholder, render_block, render_pending_block, ContentBlock, ContentItem,
};
use crate::catalog::DocumentDefinition;
use crate::core::AnswerStore;

pub const COMPANY_NAME: &str = "[Company Name]";
pub const COMPANY_ADDRESS: &str = "[Company Address]";
pub const EFFECTIVE_DATE: &str = "[Effective Date]";
pub const TOP_MANAGEMENT_NAME: &str = "[Top Management Name]";
pub const TOP_MANAGEMENT_TITLE: &str = "[Top Management Title]";
pub const QMS_REP_TITLE: &str = "[QMS Rep Title]";

const QUALITY_MANUAL_BLOCKS: &[ContentBlock] = &[
    ContentBlock {
        title: "1. Context of the Organization",
        items: &[
            ContentItem {
                question_id: "1.1.a",
                label: "Organization's Purpose & Strategic Direction",
            },
            ContentItem { question_id: "1.1.b", label: "Key Stakeholders & Expectations" },
            ContentItem { question_id: "1.1.c", label: "Internal & External Issues" },
            ContentItem { question_id: "1.1.d", label: "Legal & Regulatory Requirements" },
        ],
        include_ai_draft: true,
    },
    ContentBlock {
        title: "2. Scope of the QMS",
        items: &[
            ContentItem { question_id: "1.2.a", label: "QMS Scope Statement" },
            ContentItem { question_id: "1.2.b", label: "Applicable Standards/Frameworks" },
        ],
        include_ai_draft: true,
    },
    ContentBlock {
        title: "3. QMS Processes & Interactions",
        items: &[ContentItem { question_id: "1.3.a", label: "Key QMS Processes" }],
        include_ai_draft: true,
    },
];

const CODE_OF_CONDUCT_BLOCKS: &[ContentBlock] = &[
    ContentBlock {
        title: "1. Core Ethical Values",
        items: &[ContentItem { question_id: "2.1.a", label: "Core Ethical Values & Principles" }],
        include_ai_draft: true,
    },
    ContentBlock {
        title: "2. Business Conduct Standards",
        items: &[ContentItem {
            question_id: "2.1.b",
            label: "Specific Conduct Standards (e.g., conflicts of interest, gifts)",
        }],
        include_ai_draft: true,
    },
];

/// Content blocks a document declares, in output order.
pub fn content_blocks(def: &DocumentDefinition) -> &'static [ContentBlock] {
    use crate::catalog::DocumentKind;

    match def.kind {
        DocumentKind::QualityManual => QUALITY_MANUAL_BLOCKS,
        DocumentKind::CodeOfConduct => CODE_OF_CONDUCT_BLOCKS,
    }
}

fn push_document_meta(out: &mut String, def: &DocumentDefinition, effective_date: &str) {
    out.push_str(&format!("**Document ID:** {}\n", def.id));
    out.push_str(&format!("**Revision:** {}\n", def.revision));
    out.push_str(&format!(
        "**Effective Date:** {}\n\n",
        or_placeholder(effective_date, EFFECTIVE_DATE)
    ));
}

pub fn quality_manual(def: &DocumentDefinition, store: &AnswerStore) -> String {
    let profile = store.profile();
    let company = or_placeholder(&profile.company_name, COMPANY_NAME);
    let top_name = or_placeholder(&profile.top_management_name, TOP_MANAGEMENT_NAME);
    let top_title = or_placeholder(&profile.top_management_title, TOP_MANAGEMENT_TITLE);

    let mut out = format!("# {}\n", def.title);
    out.push_str(&format!("## {company}\n"));
    if !profile.company_abbreviation.trim().is_empty() {
        out.push_str(&format!("({})\n", profile.company_abbreviation));
    }
    out.push('\n');
    push_document_meta(&mut out, def, &profile.document_effective_date);
    out.push_str(&format!(
        "**Address:** {}\n\n",
        or_placeholder(&profile.company_address, COMPANY_ADDRESS)
    ));
    out.push_str(&format!("**Approved By:** {top_name}, {top_title}\n"));
    if !profile.qms_representative_name.trim().is_empty() {
        out.push_str(&format!(
            "**QMS Representative:** {}, {}\n",
            profile.qms_representative_name,
            or_placeholder(&profile.qms_representative_title, QMS_REP_TITLE)
        ));
    }
    out.push_str("\n---\n\n");

    for block in QUALITY_MANUAL_BLOCKS {
        render_block(&mut out, block, store);
    }

    out.push_str("\n### 4. Leadership Commitment\n");
    out.push_str(&format!(
        "**{top_name} ({top_title})** and the leadership team of **{company}** are committed to the \
         development and implementation of the Quality Management System and continually improving \
         its effectiveness. This includes ensuring quality objectives are established, communicating \
         the importance of meeting customer as well as statutory and regulatory requirements, \
         conducting management reviews, and ensuring the availability of resources.\n"
    ));
    out.push_str(
        "[Further details about leadership commitment to be populated from relevant questions & AI assistance...]\n",
    );

    render_pending_block(
        &mut out,
        "5. Planning for the QMS",
        "[Details about QMS planning, risk management, objectives to be populated...]",
    );

    out
}

pub fn code_of_conduct(def: &DocumentDefinition, store: &AnswerStore) -> String {
    let profile = store.profile();
    let company = or_placeholder(&profile.company_name, COMPANY_NAME);

    let mut out = format!("# {}\n", def.title);
    out.push_str(&format!("## For {company}\n\n"));
    push_document_meta(&mut out, def, &profile.document_effective_date);
    out.push_str(&format!(
        "**Approved By:** {}, {}\n\n",
        or_placeholder(&profile.top_management_name, TOP_MANAGEMENT_NAME),
        or_placeholder(&profile.top_management_title, TOP_MANAGEMENT_TITLE)
    ));
    out.push_str(&format!(
        "This Code of Conduct and Business Ethics applies to all employees, officers, and directors of **{company}**.\n\n---\n\n"
    ));

    for block in CODE_OF_CONDUCT_BLOCKS {
        render_block(&mut out, block, store);
    }

    render_pending_block(
        &mut out,
        "3. Reporting Violations",
        "[Procedure for reporting violations to be populated...]",
    );
    out.push_str(&format!(
        "\nAll personnel of **{company}** are encouraged to report any suspected violations of this Code.\n"
    ));

    out
}
