//! Color ramps shipped with the presets
//!
//! Thirteen steps each, lightest first, matching `SCALE_STEPS`.

pub const BLUE: [&str; 13] = [
    "#EFF6FF",
    "#DBEAFE",
    "#BFDBFE",
    "#93C5FD",
    "#60A5FA",
    "#3B82F6",
    "#2563EB",
    "#1D4ED8",
    "#1E40AF",
    "#1E3A8A",
    "#172554",
    "#101A3B",
    "#0A1126",
];

pub const VIOLET: [&str; 13] = [
    "#F5F3FF",
    "#EDE9FE",
    "#DDD6FE",
    "#C4B5FD",
    "#A78BFA",
    "#8B5CF6",
    "#7C3AED",
    "#6D28D9",
    "#5B21B6",
    "#4C1D95",
    "#2E1065",
    "#200B47",
    "#15072D",
];

pub const TEAL: [&str; 13] = [
    "#F0FDFA",
    "#CCFBF1",
    "#99F6E4",
    "#5EEAD4",
    "#2DD4BF",
    "#14B8A6",
    "#0D9488",
    "#0F766E",
    "#115E59",
    "#134E4A",
    "#042F2E",
    "#032120",
    "#021515",
];

pub const ORANGE: [&str; 13] = [
    "#FFF7ED",
    "#FFEDD5",
    "#FED7AA",
    "#FDBA74",
    "#FB923C",
    "#F97316",
    "#EA580C",
    "#C2410C",
    "#9A3412",
    "#7C2D12",
    "#431407",
    "#2F0E05",
    "#1E0903",
];

pub const ROSE: [&str; 13] = [
    "#FFF1F2",
    "#FFE4E6",
    "#FECDD3",
    "#FDA4AF",
    "#FB7185",
    "#F43F5E",
    "#E11D48",
    "#BE123C",
    "#9F1239",
    "#881337",
    "#4C0519",
    "#350412",
    "#22020B",
];

pub const GREEN: [&str; 13] = [
    "#F0FDF4",
    "#DCFCE7",
    "#BBF7D0",
    "#86EFAC",
    "#4ADE80",
    "#22C55E",
    "#16A34A",
    "#15803D",
    "#166534",
    "#14532D",
    "#052E16",
    "#04200F",
    "#02150A",
];

pub const RED: [&str; 13] = [
    "#FEF2F2",
    "#FEE2E2",
    "#FECACA",
    "#FCA5A5",
    "#F87171",
    "#EF4444",
    "#DC2626",
    "#B91C1C",
    "#991B1B",
    "#7F1D1D",
    "#450A0A",
    "#300707",
    "#1F0404",
];

pub const SKY: [&str; 13] = [
    "#F0F9FF",
    "#E0F2FE",
    "#BAE6FD",
    "#7DD3FC",
    "#38BDF8",
    "#0EA5E9",
    "#0284C7",
    "#0369A1",
    "#075985",
    "#0C4A6E",
    "#082F49",
    "#062133",
    "#041521",
];

pub const AMBER: [&str; 13] = [
    "#FFFBEB",
    "#FEF3C7",
    "#FDE68A",
    "#FCD34D",
    "#FBBF24",
    "#F59E0B",
    "#D97706",
    "#B45309",
    "#92400E",
    "#78350F",
    "#451A03",
    "#301202",
    "#1F0C01",
];

pub const GRAY: [&str; 13] = [
    "#F9FAFB",
    "#F3F4F6",
    "#E5E7EB",
    "#D1D5DB",
    "#9CA3AF",
    "#6B7280",
    "#4B5563",
    "#374151",
    "#1F2937",
    "#111827",
    "#030712",
    "#02050D",
    "#010308",
];

pub const SLATE: [&str; 13] = [
    "#F8FAFC",
    "#F1F5F9",
    "#E2E8F0",
    "#CBD5E1",
    "#94A3B8",
    "#64748B",
    "#475569",
    "#334155",
    "#1E293B",
    "#0F172A",
    "#020617",
    "#010410",
    "#01030A",
];
