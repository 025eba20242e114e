//! Default File System Layout
//!
//! The hard-coded tree the VFS rebuilds on reset or when no valid snapshot
//! can be loaded: `/home/user` pre-populated with the informational files the
//! terminal exposes.

use indexmap::IndexMap;

use super::types::Node;

pub const WELCOME_TXT: &str = "Welcome to Raikhen Terminal!

I'm an AI assistant here to help you learn about our services.
Feel free to ask me anything about:
  - AI Consulting
  - Custom Software Development
  - Machine Learning Integration

Just type your question and press Enter.
Type 'exit' to leave chat mode and explore the file system.
Type 'help' for available commands.";

pub const AI_CONSULTING_TXT: &str = "AI Consulting Services
======================

Strategic guidance on AI adoption, from identifying opportunities
to implementation planning.

We help you:
  - Assess AI readiness and opportunities
  - Develop AI strategy and roadmap
  - Select appropriate AI technologies
  - Plan implementation and integration
  - Measure ROI and optimize

Contact us to schedule a consultation.";

pub const CUSTOM_SOFTWARE_TXT: &str = "Custom Software Development
===========================

Bespoke applications built to your exact specifications
with modern technologies.

Our expertise includes:
  - Web applications (React, Next.js, Node.js)
  - Mobile applications (React Native, iOS, Android)
  - Backend systems and APIs
  - Database design and optimization
  - Cloud infrastructure (AWS, GCP, Azure)

Every project is tailored to your unique needs.";

pub const ML_INTEGRATION_TXT: &str = "Machine Learning Integration
============================

Seamlessly integrate machine learning models into your
existing systems and workflows.

Services include:
  - Model selection and fine-tuning
  - API integration for ML services
  - Custom model development
  - MLOps and model deployment
  - Performance monitoring and optimization

Transform your data into actionable insights.";

pub const SERVICES_SH: &str = r#"#!/bin/bash
# Raikhen Services
# Run this script to view available services

echo ""
echo "╔════════════════════════════════════════════════════════════╗"
echo "║                    RAIKHEN SERVICES                        ║"
echo "╚════════════════════════════════════════════════════════════╝"
echo ""
echo "┌──────────────────────────────────────────────────────────────┐"
echo "│  AI CONSULTING                                               │"
echo "│  Strategic guidance on AI adoption, from identifying         │"
echo "│  opportunities to implementation planning.                   │"
echo "└──────────────────────────────────────────────────────────────┘"
echo ""
echo "┌──────────────────────────────────────────────────────────────┐"
echo "│  CUSTOM SOFTWARE                                             │"
echo "│  Bespoke applications built to your exact specifications     │"
echo "│  with modern technologies.                                   │"
echo "└──────────────────────────────────────────────────────────────┘"
echo ""
echo "┌──────────────────────────────────────────────────────────────┐"
echo "│  ML INTEGRATION                                              │"
echo "│  Seamlessly integrate machine learning models into your      │"
echo "│  existing systems and workflows.                             │"
echo "└──────────────────────────────────────────────────────────────┘"
echo ""
echo "Run 'cat services/<service>.txt' for more details.""#;

pub const CONTACT_SH: &str = r#"#!/bin/bash
# Contact Raikhen
# ---------------
# Email: hello@raikhen.com
# Website: https://raikhen.com

echo "Ready to start your project?"
echo "Reach out to us at hello@raikhen.com""#;

/// Build the default tree. Insertion order is the order `ls` lists entries.
pub fn default_tree() -> Node {
    let mut services = IndexMap::new();
    services.insert("ai-consulting.txt".to_string(), Node::file(AI_CONSULTING_TXT));
    services.insert("custom-software.txt".to_string(), Node::file(CUSTOM_SOFTWARE_TXT));
    services.insert("ml-integration.txt".to_string(), Node::file(ML_INTEGRATION_TXT));

    let mut user = IndexMap::new();
    user.insert("welcome.txt".to_string(), Node::file(WELCOME_TXT));
    user.insert("services".to_string(), Node::Dir { children: services });
    user.insert("services.sh".to_string(), Node::file(SERVICES_SH));
    user.insert("contact.sh".to_string(), Node::file(CONTACT_SH));

    let mut home = IndexMap::new();
    home.insert("user".to_string(), Node::Dir { children: user });

    let mut root = IndexMap::new();
    root.insert("home".to_string(), Node::Dir { children: home });

    Node::Dir { children: root }
}
