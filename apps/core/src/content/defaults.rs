//! Built-in therapeutic content.

pub(super) const GREETING: &str = "Hello! I'm MindfulSupport AI. I'm here to listen and support you through whatever you're experiencing. What would you like to talk about today?";

pub(super) const ANXIETY_TRIGGERS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "panic",
    "nervous",
    "stress",
    "overwhelmed",
    "fear",
];

pub(super) const ANXIETY_RESPONSES: &[&str] = &[
    "I can hear that you're feeling anxious right now. That must be really difficult. Would you like to try a quick grounding exercise together?",
    "Anxiety can feel overwhelming, but you're not alone in this. Let's work through this step by step. Can you tell me what's contributing to these feelings?",
    "It takes courage to reach out when you're feeling anxious. I'm here to support you. Would you like to explore some coping strategies that might help?",
];

pub(super) const ANXIETY_FOLLOW_UPS: &[&str] = &[
    "Try the 5-4-3-2-1 technique: Name 5 things you can see, 4 you can touch, 3 things you can hear, 2 you can smell, and 1 you can taste.",
    "Let's practice some deep breathing together. Breathe in for 4 counts, hold for 4, exhale for 6. This can help calm your nervous system.",
    "Remember, anxiety is temporary. You've gotten through difficult moments before, and you can get through this one too.",
];

// "hard", "difficult" and "down" are intentionally broad.
pub(super) const DEPRESSION_TRIGGERS: &[&str] = &[
    "depressed",
    "sad",
    "hopeless",
    "empty",
    "worthless",
    "tired",
    "lonely",
    "isolated",
    "hard",
    "difficult",
    "down",
];

pub(super) const DEPRESSION_RESPONSES: &[&str] = &[
    "I hear you, and I want you to know that your feelings are valid. Depression can make everything feel heavy, but you matter, and there is hope.",
    "Thank you for sharing something so personal with me. It takes strength to acknowledge these feelings. You don't have to face this alone.",
    "These feelings you're describing sound really painful. I'm glad you reached out. Even small steps forward can make a difference.",
];

pub(super) const DEPRESSION_FOLLOW_UPS: &[&str] = &[
    "What's one tiny thing that might bring you even a moment of comfort today? It could be as simple as listening to a favorite song or having a warm drink.",
    "Depression often tells us lies about ourselves. What's one thing you've accomplished recently, no matter how small?",
    "Sometimes when we're feeling low, connecting with others or doing something meaningful can help. What has helped you feel better in the past?",
];

pub(super) const CRISIS_TRIGGERS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "hurt myself",
    "die",
    "death",
    "killing",
    "harm myself",
];

pub(super) const CRISIS_RESPONSES: &[&str] = &[
    "I'm really concerned about you right now. Your life has value, and there are people who want to help. Please reach out to the National Suicide Prevention Lifeline: 988.",
    "What you're going through sounds incredibly painful, and I want you to get the support you need right now. Please contact emergency services (911) or call 988 for immediate help.",
    "You deserve support and care. These feelings can change, even when they feel permanent. Please reach out to a crisis counselor immediately: Call or text 988.",
];

/// (name, description, steps)
pub(super) const EXERCISES: &[(&str, &str, &str)] = &[
    (
        "Thought Challenging",
        "Examining negative thoughts for accuracy and balance",
        "Let's look at that thought together. What evidence supports it? What evidence contradicts it? What would you tell a friend having this same thought?",
    ),
    (
        "Grounding Techniques",
        "Exercises to anchor yourself in the present moment",
        "Let's try the 5-4-3-2-1 technique: Name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
    ),
    (
        "Progressive Muscle Relaxation",
        "Systematic tensing and relaxing of muscle groups",
        "Starting with your feet, tense the muscles for 5 seconds, then release and notice the contrast. Work your way up through your body, one muscle group at a time.",
    ),
];

pub(super) const VALIDATION: &[&str] = &[
    "Your feelings are completely valid and understandable.",
    "It takes real courage to reach out and ask for support.",
    "You're not alone in feeling this way, and there's no shame in struggling.",
    "Thank you for trusting me with something so personal.",
    "What you're going through sounds really difficult, and I'm glad you're here.",
    "You're taking an important step by talking about this.",
    "Your willingness to work on your mental health shows real strength.",
    "It's okay to not be okay. Healing isn't linear, and that's normal.",
];

pub(super) const SUPPORTIVE: &[&str] = &[
    "I hear you. Thank you for sharing that with me. Can you tell me more about what you're experiencing?",
    "It sounds like you're going through something difficult. I'm here to listen and support you.",
    "What you're feeling is important. Would you like to explore this together?",
    "I appreciate you opening up. How has this been affecting you day to day?",
    "That sounds challenging. What kind of support would feel most helpful right now?",
];

pub(super) const COPING_IMMEDIATE: &[&str] = &[
    "Deep breathing: 4 counts in, 4 hold, 6 counts out",
    "Cold water on your face or ice cubes in your hands",
    "Listen to calming music or nature sounds",
    "Call a trusted friend or family member",
    "Take a short walk, even if it's just around your room",
];

pub(super) const COPING_DAILY: &[&str] = &[
    "Maintain a regular sleep schedule",
    "Engage in physical activity, even light stretching",
    "Practice gratitude by writing down 3 things daily",
    "Limit caffeine and alcohol",
    "Create a morning routine that feels nurturing",
];
