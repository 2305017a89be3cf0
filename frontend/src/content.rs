//! Static page content. Fixed at startup and never mutated.

use crate::analytics::EngagementFeature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Gradient stops used behind the phone mockup.
    pub color: (&'static str, &'static str),
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome classes.
    pub icon: &'static str,
    pub color: (&'static str, &'static str),
    pub engagement: EngagementFeature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#features", label: "Features" },
    NavItem { href: "#screenshots", label: "Screenshots" },
    NavItem { href: "#app-description", label: "App" },
    NavItem { href: "#testimonials", label: "Testimonials" },
    NavItem { href: "#preregister", label: "Waitlist" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        number: "01",
        title: "Expense Tracking",
        description: "Automatically categorize and track your expenses to understand where your money goes.",
        icon: "fas fa-arrow-trend-up",
        color: ("#3B82F6", "#A855F7"),
        engagement: EngagementFeature::ExpenseTracker,
    },
    Feature {
        number: "02",
        title: "Budget Planning",
        description: "Create custom budgets and get alerts when you're approaching your limits.",
        icon: "fas fa-chart-pie",
        color: ("#22C55E", "#14B8A6"),
        engagement: EngagementFeature::BudgetTracker,
    },
    Feature {
        number: "03",
        title: "Bill Reminders",
        description: "Never miss a payment with automated bill reminders and scheduling.",
        icon: "fas fa-credit-card",
        color: ("#F59E0B", "#F97316"),
        engagement: EngagementFeature::AccountTransfer,
    },
    Feature {
        number: "04",
        title: "Secure Banking",
        description: "Bank-level encryption keeps your financial data safe and secure.",
        icon: "fas fa-shield-halved",
        color: ("#EF4444", "#EC4899"),
        engagement: EngagementFeature::AccountTransfer,
    },
    Feature {
        number: "05",
        title: "Investment Tracking",
        description: "Monitor your investments and track your portfolio performance in real-time.",
        icon: "fas fa-arrow-trend-up",
        color: ("#6366F1", "#8B5CF6"),
        engagement: EngagementFeature::Statistics,
    },
];

pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        id: 1,
        title: "Dashboard Overview",
        description: "A brief summary of how you have managed your finances so far this month.",
        image: "/assets/screenshots/1.jpg",
        color: ("rgba(59, 130, 246, 0.2)", "rgba(139, 92, 246, 0.2)"),
        accent: "#8B5CF6",
    },
    Screenshot {
        id: 2,
        title: "Income and expenses report",
        description: "Detailed report of the economic flow in a waste of time",
        image: "/assets/screenshots/2.jpg",
        color: ("rgba(34, 197, 94, 0.2)", "rgba(16, 185, 129, 0.2)"),
        accent: "#10B981",
    },
    Screenshot {
        id: 3,
        title: "Account registration",
        description: "View all the income you have in all your accounts",
        image: "/assets/screenshots/3.jpg",
        color: ("rgba(245, 158, 11, 0.2)", "rgba(249, 115, 22, 0.2)"),
        accent: "#F59E0B",
    },
    Screenshot {
        id: 4,
        title: "Category management",
        description: "Categories help to organize income sources clearly and personalized.",
        image: "/assets/screenshots/4.jpg",
        color: ("rgba(59, 130, 246, 0.2)", "rgba(6, 182, 212, 0.2)"),
        accent: "#0EA5E9",
    },
    Screenshot {
        id: 5,
        title: "Visualization of historical data",
        description: "Compare with previous months and make strategic decisions.",
        image: "/assets/screenshots/5.jpg",
        color: ("rgba(239, 68, 68, 0.2)", "rgba(236, 72, 153, 0.2)"),
        accent: "#E11D48",
    },
    Screenshot {
        id: 6,
        title: "Editing existing records",
        description: "Fix or delete the records",
        image: "/assets/screenshots/6.jpg",
        color: ("rgba(99, 102, 241, 0.2)", "rgba(139, 92, 246, 0.2)"),
        accent: "#6366F1",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Small Business Owner",
        company: "Craft & Co.",
        quote: "Moneo has completely transformed how I manage my business finances. The expense tracking and budget planning features have saved me hours of work each month.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Software Engineer",
        company: "TechVision",
        quote: "As someone who loves data, I appreciate how Moneo visualizes my spending patterns. The investment tracking feature has helped me make smarter decisions with my portfolio.",
    },
    Testimonial {
        name: "Aisha Patel",
        role: "Freelance Designer",
        company: "Studio AP",
        quote: "The bill reminder feature has saved me from late payments countless times. Moneo gives me peace of mind knowing my finances are organized in one secure place.",
    },
    Testimonial {
        name: "David Rodriguez",
        role: "Marketing Director",
        company: "Brand Forward",
        quote: "I've tried many finance apps, but Moneo stands out with its intuitive interface and powerful features. It's helped me save more and spend smarter.",
    },
];
